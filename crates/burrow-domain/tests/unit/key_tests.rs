//! Unit tests for service keys

use burrow_domain::{ServiceKey, ServiceType};
use std::collections::HashSet;

trait Plugin {}

#[test]
fn test_unnamed_keys_of_same_type_are_equal() {
    assert_eq!(ServiceKey::unnamed::<u32>(), ServiceKey::of::<u32>(None));
}

#[test]
fn test_names_distinguish_keys() {
    let a = ServiceKey::of::<u32>(Some("a"));
    let b = ServiceKey::of::<u32>(Some("b"));
    assert_ne!(a, b);
    assert_ne!(a, ServiceKey::unnamed::<u32>());
}

#[test]
fn test_types_distinguish_keys() {
    assert_ne!(
        ServiceKey::of::<u32>(Some("port")),
        ServiceKey::of::<u64>(Some("port"))
    );
}

#[test]
fn test_equal_keys_collapse_in_hash_set() {
    let mut keys = HashSet::new();
    keys.insert(ServiceKey::of::<String>(Some("x")));
    keys.insert(ServiceKey::new(Some("x".to_string()), ServiceType::of::<String>()));
    keys.insert(ServiceKey::unnamed::<String>());
    assert_eq!(keys.len(), 2);
}

#[test]
fn test_trait_object_service_type() {
    let service_type = ServiceType::of::<dyn Plugin>();
    assert!(service_type.is::<dyn Plugin>());
    assert!(!service_type.is::<u8>());
    assert!(service_type.name().contains("Plugin"));
}

#[test]
fn test_key_accessors() {
    let key = ServiceKey::of::<u8>(Some("byte"));
    assert_eq!(key.name(), Some("byte"));
    assert_eq!(key.service_type(), ServiceType::of::<u8>());
}

#[test]
fn test_key_display() {
    assert_eq!(ServiceKey::unnamed::<u8>().to_string(), "u8");
    assert_eq!(ServiceKey::of::<u8>(Some("byte")).to_string(), "u8 (\"byte\")");
}
