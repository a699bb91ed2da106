//! Service-locator port
//!
//! A locator answers "give me an instance of this type" without the caller
//! knowing anything about the registry behind it. Instances cross the
//! boundary type-erased: an [`AnyService`] holds an `Arc<T>` for the
//! requested service type `T`.

use crate::error::{Error, Result};
use crate::key::{ServiceKey, ServiceType};
use std::any::Any;
use std::sync::Arc;

/// Type-erased instance holding an `Arc<T>`
pub type AnyService = Box<dyn Any + Send + Sync>;

/// Lookup-only view of a service registry
pub trait ServiceLocator: Send + Sync {
    /// Instance registered for `service_type` under `key` (`None` for the
    /// unnamed registration)
    fn get_instance(&self, service_type: ServiceType, key: Option<&str>) -> Result<AnyService>;

    /// One instance per registration of `service_type`, named or not
    fn get_all_instances(&self, service_type: ServiceType) -> Result<Vec<AnyService>>;

    /// Typed form of [`get_instance`](Self::get_instance)
    fn get<T: ?Sized + Send + Sync + 'static>(&self, key: Option<&str>) -> Result<Arc<T>>
    where
        Self: Sized,
    {
        let service_type = ServiceType::of::<T>();
        let instance = self.get_instance(service_type, key)?;
        downcast_service(ServiceKey::new(key, service_type), instance)
    }

    /// Typed form of [`get_all_instances`](Self::get_all_instances)
    fn get_all<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>>
    where
        Self: Sized,
    {
        let service_type = ServiceType::of::<T>();
        self.get_all_instances(service_type)?
            .into_iter()
            .map(|instance| downcast_service(ServiceKey::new(None::<String>, service_type), instance))
            .collect()
    }
}

/// Recover the `Arc<T>` held by a type-erased instance
pub fn downcast_service<T: ?Sized + Send + Sync + 'static>(
    key: ServiceKey,
    instance: AnyService,
) -> Result<Arc<T>> {
    instance
        .downcast::<Arc<T>>()
        .map(|boxed| *boxed)
        .map_err(|_| Error::type_mismatch(key, ServiceType::of::<T>()))
}
