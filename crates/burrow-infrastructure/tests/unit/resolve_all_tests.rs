//! Unit tests for resolving every registration of a type

use burrow_infrastructure::Container;
use std::sync::Arc;

use crate::test_services::*;

fn second() -> Result<Arc<dyn SimpleService>, burrow_domain::BoxError> {
    Ok(Arc::new(SecondSimpleServiceImpl))
}

#[test]
fn test_resolve_all_returns_named_and_unnamed_registrations() {
    let container = Container::new();
    container.register(|_| simple());
    container.register_named("first", |_| simple());
    container.register_named("second", |_| second());
    container.register_instance(Arc::new(OtherServiceImpl) as Arc<dyn OtherService>);

    let all = container.resolve_all::<dyn SimpleService>().unwrap();

    assert_eq!(all.len(), 3);
    let simple_count = all.iter().filter(|s| s.describe() == "simple").count();
    let second_count = all.iter().filter(|s| s.describe() == "second").count();
    assert_eq!(simple_count, 2);
    assert_eq!(second_count, 1);
    assert!(!Arc::ptr_eq(&all[0], &all[1]));
}

#[test]
fn test_resolve_all_follows_registration_order() {
    let container = Container::new();
    container.register_named("b", |_| second());
    container.register_named("a", |_| simple());

    let all = container.resolve_all::<dyn SimpleService>().unwrap();
    let order: Vec<_> = all.iter().map(|s| s.describe()).collect();
    assert_eq!(order, vec!["second", "simple"]);
}

#[test]
fn test_resolve_all_without_registrations_is_empty() {
    let container = Container::new();
    container.register(|_| simple());

    let all = container.resolve_all::<dyn OtherService>().unwrap();
    assert!(all.is_empty());
}

#[test]
fn test_resolve_all_respects_lifetimes() {
    let container = Container::new();
    container.register_singleton(|_| simple());
    container.register_named("transient", |_| simple());

    let first = container.resolve_all::<dyn SimpleService>().unwrap();
    let second = container.resolve_all::<dyn SimpleService>().unwrap();

    assert!(Arc::ptr_eq(&first[0], &second[0]));
    assert!(!Arc::ptr_eq(&first[1], &second[1]));
}

#[test]
fn test_resolve_all_fails_on_first_failing_factory() {
    let container = Container::new();
    container.register(|_| simple());
    container.register_named("broken", |_| failing());

    let err = container.resolve_all::<dyn SimpleService>().unwrap_err();
    assert_eq!(
        err.first_failure().and_then(|key| key.name()),
        Some("broken")
    );
}
