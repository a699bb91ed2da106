//! Service identity types
//!
//! A registration is addressed by a [`ServiceKey`]: the abstract service
//! type plus an optional name. Two keys address the same registration iff
//! their names are equal (absent equals absent) and their types are the
//! same type.
//!
//! ```
//! use burrow_domain::{ServiceKey, ServiceType};
//!
//! let unnamed = ServiceKey::unnamed::<String>();
//! let named = ServiceKey::of::<String>(Some("greeting"));
//!
//! assert_ne!(unnamed, named);
//! assert_eq!(named, ServiceKey::new(Some("greeting"), ServiceType::of::<String>()));
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque identity of a service contract
///
/// Wraps the [`TypeId`] of the contract together with its type name for
/// diagnostics. Trait objects are valid contracts, so `ServiceType::of::<dyn Trait>()`
/// is as good a key as a concrete type.
#[derive(Clone, Copy)]
pub struct ServiceType {
    id: TypeId,
    name: &'static str,
}

impl ServiceType {
    /// Identity of the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Runtime type id backing this identity
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this identity denotes `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

// The name is informational; identity is the TypeId alone.
impl PartialEq for ServiceType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceType {}

impl Hash for ServiceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceType").field(&self.name).finish()
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for ServiceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Registry address of a service: optional name plus service type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceKey {
    name: Option<String>,
    service_type: ServiceType,
}

impl ServiceKey {
    /// Create a key from an optional name and a type identity
    pub fn new<S: Into<String>>(name: Option<S>, service_type: ServiceType) -> Self {
        Self {
            name: name.map(Into::into),
            service_type,
        }
    }

    /// Create a key for the service type `T`
    pub fn of<T: ?Sized + 'static>(name: Option<&str>) -> Self {
        Self::new(name, ServiceType::of::<T>())
    }

    /// Create the key of the unnamed registration of `T`
    pub fn unnamed<T: ?Sized + 'static>() -> Self {
        Self::new(None::<String>, ServiceType::of::<T>())
    }

    /// Registration name, `None` for the unnamed registration
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Service type identity
    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            None => write!(f, "{}", self.service_type),
            Some(name) => write!(f, "{} (\"{}\")", self.service_type, name),
        }
    }
}

impl Serialize for ServiceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ServiceKey", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("service_type", &self.service_type)?;
        state.end()
    }
}
