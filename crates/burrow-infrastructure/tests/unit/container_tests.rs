//! Unit tests for registration and resolution

use burrow_domain::{Error, Lifetime, ServiceKey};
use burrow_infrastructure::{Container, ServiceHandler};
use std::sync::Arc;

use crate::test_services::*;

#[test]
fn test_registered_service_is_resolved() {
    let container = Container::new();
    container.register(|_| simple());

    let resolved = container.resolve::<dyn SimpleService>().unwrap();
    assert_eq!(resolved.describe(), "simple");
}

#[test]
fn test_named_registration_is_resolved() {
    let container = Container::new();
    container.register_named("simple", |_| simple());

    let resolved = container.resolve_named::<dyn SimpleService>("simple").unwrap();
    assert_eq!(resolved.describe(), "simple");
}

#[test]
fn test_named_registration_is_not_resolved_without_name() {
    let container = Container::new();
    container.register_named("simple", |_| simple());

    let err = container.resolve::<dyn SimpleService>().unwrap_err();
    match err {
        Error::UnknownRegistration { key } => {
            assert_eq!(key, ServiceKey::unnamed::<dyn SimpleService>());
        }
        other => panic!("Expected UnknownRegistration, got {other:?}"),
    }
}

#[test]
fn test_unknown_named_registration_carries_requested_key() {
    let container = Container::new();

    let err = container.resolve_named::<dyn SimpleService>("missing").unwrap_err();
    assert!(err.is_unknown_registration());
    assert_eq!(
        err.key(),
        Some(&ServiceKey::of::<dyn SimpleService>(Some("missing")))
    );
}

#[test]
fn test_factory_receives_the_resolving_container() {
    let container = Container::new();
    let expected_id = container.id();
    container.register(move |c: &Container| {
        assert_eq!(c.id(), expected_id);
        simple()
    });

    container.resolve::<dyn SimpleService>().unwrap();
}

#[test]
fn test_nested_singleton_is_shared_between_transients() {
    let container = Container::new();
    container.register_singleton(|_| simple());
    container.register(|c| {
        Ok(Arc::new(ServiceWithNested {
            nested: c.resolve::<dyn SimpleService>()?,
        }))
    });

    let first = container.resolve::<ServiceWithNested>().unwrap();
    let second = container.resolve::<ServiceWithNested>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.nested, &second.nested));
}

#[test]
fn test_reregistration_replaces_handler() {
    let container = Container::new();
    container.register_singleton(|_| simple());
    let before = container.resolve::<dyn SimpleService>().unwrap();

    container.register(|_| Ok(Arc::new(SecondSimpleServiceImpl) as Arc<dyn SimpleService>));

    let first = container.resolve::<dyn SimpleService>().unwrap();
    let second = container.resolve::<dyn SimpleService>().unwrap();
    assert_eq!(first.describe(), "second");
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(before.describe(), "simple");
    assert_eq!(container.len(), 1);
}

#[test]
fn test_register_handler_binds_owner() {
    let container = Container::new();
    let handler = Arc::new(ServiceHandler::<dyn SimpleService>::transient(|_| simple()));

    container
        .register_handler(Some("bound"), Arc::clone(&handler))
        .unwrap();

    assert_eq!(handler.owner_id(), Some(container.id()));
    assert_eq!(
        handler.key(),
        Some(&ServiceKey::of::<dyn SimpleService>(Some("bound")))
    );
}

#[test]
fn test_handler_cannot_be_installed_twice() {
    let container = Container::new();
    let handler = Arc::new(ServiceHandler::<dyn SimpleService>::transient(|_| simple()));
    container
        .register_handler(Some("first"), Arc::clone(&handler))
        .unwrap();

    let err = container
        .register_handler(Some("second"), Arc::clone(&handler))
        .unwrap_err();

    assert!(matches!(err, Error::OwnerAlreadyBound { .. }));
    assert!(!container.is_registered::<dyn SimpleService>(Some("second")));
    assert_eq!(container.len(), 1);
}

#[test]
fn test_handler_cannot_move_to_another_container() {
    let first = Container::new();
    let second = Container::new();
    let handler = Arc::new(ServiceHandler::<dyn SimpleService>::transient(|_| simple()));
    first.register_handler(None, Arc::clone(&handler)).unwrap();

    let err = second.register_handler(None, handler).unwrap_err();
    assert!(matches!(err, Error::OwnerAlreadyBound { .. }));
    assert!(second.is_empty());
}

#[test]
fn test_registrations_are_listed_in_order() {
    let container = Container::new();
    container.register(|_| simple());
    container.register_named_singleton("cached", |_| simple());
    container.register_instance(Arc::new(OtherServiceImpl) as Arc<dyn OtherService>);

    let registrations = container.registrations();
    let lifetimes: Vec<_> = registrations.iter().map(|info| info.lifetime).collect();
    assert_eq!(
        lifetimes,
        vec![Lifetime::Transient, Lifetime::Singleton, Lifetime::Instance]
    );
    assert_eq!(registrations[1].key.name(), Some("cached"));
    assert!(!registrations[1].initialized);
    assert!(registrations[2].initialized);
    assert!(registrations[1].to_string().contains("[singleton]"));
}

#[test]
fn test_is_registered() {
    let container = Container::new();
    assert!(container.is_empty());

    container.register_named("simple", |_| simple());

    assert!(container.is_registered::<dyn SimpleService>(Some("simple")));
    assert!(!container.is_registered::<dyn SimpleService>(None));
    assert!(!container.is_registered::<dyn OtherService>(Some("simple")));
}

#[test]
fn test_factory_may_register_reentrantly() {
    let container = Container::new();
    container.register(|c: &Container| {
        c.register_instance(Arc::new(OtherServiceImpl) as Arc<dyn OtherService>);
        simple()
    });

    container.resolve::<dyn SimpleService>().unwrap();
    assert!(container.is_registered::<dyn OtherService>(None));
}
