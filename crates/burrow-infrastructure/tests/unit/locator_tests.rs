//! Unit tests for the service-locator adapter

use burrow_domain::{Error, ServiceLocator, ServiceType};
use burrow_infrastructure::{Container, ContainerServiceLocator};
use std::sync::Arc;

use crate::test_services::*;

fn locator() -> ContainerServiceLocator {
    let container = Container::new();
    container.register(|_| simple());
    container.register_named("named", |_| simple());
    container.register_instance(Arc::new(OtherServiceImpl) as Arc<dyn OtherService>);
    ContainerServiceLocator::new(Arc::new(container))
}

#[test]
fn test_get_instance_forwards_unnamed_resolve() {
    let locator = locator();
    let instance = locator
        .get_instance(ServiceType::of::<dyn SimpleService>(), None)
        .unwrap();

    let service = instance.downcast::<Arc<dyn SimpleService>>().unwrap();
    assert_eq!(service.describe(), "simple");
}

#[test]
fn test_typed_get_forwards_named_resolve() {
    let service = locator().get::<dyn SimpleService>(Some("named")).unwrap();
    assert_eq!(service.describe(), "simple");
}

#[test]
fn test_unknown_key_is_reported() {
    let err = locator()
        .get_instance(ServiceType::of::<dyn SimpleService>(), Some("missing"))
        .unwrap_err();
    assert!(err.is_unknown_registration());
}

#[test]
fn test_get_all_instances_forwards_resolve_all() {
    let locator = locator();
    assert_eq!(
        locator
            .get_all_instances(ServiceType::of::<dyn SimpleService>())
            .unwrap()
            .len(),
        2
    );
    assert_eq!(locator.get_all::<dyn OtherService>().unwrap().len(), 1);
    assert!(locator.get_all::<String>().unwrap().is_empty());
}

#[test]
fn test_erased_resolution_wraps_factory_failure() {
    let container = Container::new();
    container.register(|_| failing());
    let locator = ContainerServiceLocator::new(Arc::new(container));

    let err = locator.get::<dyn SimpleService>(None).unwrap_err();
    assert!(matches!(err, Error::Resolve(_)));
}

#[test]
fn test_locator_shares_container() {
    let container = Arc::new(Container::new());
    let locator = ContainerServiceLocator::new(Arc::clone(&container));

    container.register_singleton(|_| simple());

    let from_locator = locator.get::<dyn SimpleService>(None).unwrap();
    let from_container = container.resolve::<dyn SimpleService>().unwrap();
    assert!(Arc::ptr_eq(&from_locator, &from_container));
    assert!(Arc::ptr_eq(locator.container(), &container));
}
