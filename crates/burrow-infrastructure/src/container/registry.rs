//! Service registry
//!
//! The [`Container`] maps each [`ServiceKey`] to the handler installed under
//! it and resolves instances through that handler. Every factory receives
//! the container it is registered in, which is how object graphs compose:
//!
//! ```
//! use std::sync::Arc;
//! use burrow_infrastructure::container::Container;
//!
//! struct Database { url: String }
//! struct Repository { db: Arc<Database> }
//!
//! let container = Container::new();
//! container.register_instance(Arc::new(Database { url: "memory://".into() }));
//! container.register(|c| Ok(Arc::new(Repository { db: c.resolve::<Database>()? })));
//!
//! let repo = container.resolve::<Repository>().unwrap();
//! assert_eq!(repo.db.url, "memory://");
//! ```
//!
//! ## Concurrency
//!
//! The key→handler map is a `DashMap`, so registration and resolution may be
//! called from any number of threads. No map guard is held while a handler
//! runs; factories are free to resolve (or register) re-entrantly.

use burrow_domain::error::{BoxError, Error, Result};
use burrow_domain::{AnyService, Lifetime, ServiceKey, ServiceType};
use dashmap::DashMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace, warn};

use super::handler::{ErasedHandler, ServiceHandler};
use crate::config::ContainerConfig;

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// An installed handler together with its registration order
#[derive(Clone)]
struct Registration {
    handler: Arc<dyn ErasedHandler>,
    sequence: u64,
}

/// Diagnostic view of one registration
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationInfo {
    /// Registration key
    pub key: ServiceKey,
    /// Lifetime of the installed handler
    pub lifetime: Lifetime,
    /// Whether the next resolution returns an existing instance
    pub initialized: bool,
}

impl fmt::Display for RegistrationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.key, self.lifetime)
    }
}

/// Inversion-of-control registry
pub struct Container {
    id: u64,
    services: DashMap<ServiceKey, Registration>,
    sequence: AtomicU64,
    config: ContainerConfig,
}

impl Container {
    /// Create an empty container with default configuration
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// Create an empty container with the given configuration
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            id: NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed),
            services: DashMap::new(),
            sequence: AtomicU64::new(0),
            config,
        }
    }

    /// Process-unique id of this container
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Configuration this container was created with
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Install `handler` under the key (`name`, `T`)
    ///
    /// Replaces any handler previously installed under the same key. The
    /// handler is bound to this container before it becomes reachable; a
    /// handler that already has an owner is rejected and the registry is
    /// left unchanged.
    pub fn register_handler<T>(&self, name: Option<&str>, handler: Arc<ServiceHandler<T>>) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<T>(name);
        handler.bind_owner(self.id, key.clone())?;
        self.install(key, handler);
        Ok(())
    }

    /// Register an unnamed transient service
    pub fn register<T, F>(&self, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> std::result::Result<Arc<T>, BoxError> + Send + Sync + 'static,
    {
        self.install_new(None, ServiceHandler::transient(factory));
    }

    /// Register a named transient service
    pub fn register_named<T, F>(&self, name: &str, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> std::result::Result<Arc<T>, BoxError> + Send + Sync + 'static,
    {
        self.install_new(Some(name), ServiceHandler::transient(factory));
    }

    /// Register an unnamed singleton service
    pub fn register_singleton<T, F>(&self, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> std::result::Result<Arc<T>, BoxError> + Send + Sync + 'static,
    {
        self.install_new(None, ServiceHandler::singleton(factory));
    }

    /// Register a named singleton service
    pub fn register_named_singleton<T, F>(&self, name: &str, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> std::result::Result<Arc<T>, BoxError> + Send + Sync + 'static,
    {
        self.install_new(Some(name), ServiceHandler::singleton(factory));
    }

    /// Register a pre-built unnamed instance
    pub fn register_instance<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.install_new(None, ServiceHandler::instance(instance));
    }

    /// Register a pre-built named instance
    pub fn register_named_instance<T>(&self, name: &str, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.install_new(Some(name), ServiceHandler::instance(instance));
    }

    fn install_new<T>(&self, name: Option<&str>, handler: ServiceHandler<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<T>(name);
        let handler = handler.owned_by(self.id, key.clone());
        self.install(key, Arc::new(handler));
    }

    fn install(&self, key: ServiceKey, handler: Arc<dyn ErasedHandler>) {
        let lifetime = handler.lifetime();
        let registration = Registration {
            handler,
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
        };

        match self.services.insert(key.clone(), registration) {
            Some(previous) if self.config.warn_on_replace => {
                warn!(
                    service = %key,
                    previous = %previous.handler.lifetime(),
                    lifetime = %lifetime,
                    "Replacing existing registration"
                );
            }
            Some(previous) => {
                debug!(
                    service = %key,
                    previous = %previous.handler.lifetime(),
                    lifetime = %lifetime,
                    "Replacing existing registration"
                );
            }
            None => {
                debug!(service = %key, lifetime = %lifetime, "Registered service");
            }
        }
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve the unnamed registration of `T`
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_key(None)
    }

    /// Resolve the registration of `T` named `name`
    pub fn resolve_named<T>(&self, name: &str) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_key(Some(name))
    }

    /// Resolve the registration of `T` under an optional name
    ///
    /// Fails with [`Error::UnknownRegistration`] when nothing is installed
    /// under the key. Factory failures are returned exactly as the handler
    /// wrapped them.
    pub fn resolve_key<T>(&self, name: Option<&str>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<T>(name);
        let registration = self.lookup(&key)?;
        let result = typed_handler::<T>(&key, &registration)?.get_instance(self);
        self.trace_outcome(&key, result.as_ref().map(|_| ()));
        result
    }

    /// Resolve one instance of every registration of `T`, named or not
    ///
    /// Instances come back in registration order. No registrations yield an
    /// empty vector; the first failing resolution aborts the whole call.
    pub fn resolve_all<T>(&self) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.registrations_of(ServiceType::of::<T>())
            .into_iter()
            .map(|(key, registration)| {
                let result = typed_handler::<T>(&key, &registration)?.get_instance(self);
                self.trace_outcome(&key, result.as_ref().map(|_| ()));
                result
            })
            .collect()
    }

    /// Type-erased form of [`resolve_key`](Self::resolve_key)
    ///
    /// The returned box holds an `Arc<T>` where `T` is the type denoted by
    /// `service_type`.
    pub fn resolve_erased(&self, name: Option<&str>, service_type: ServiceType) -> Result<AnyService> {
        let key = ServiceKey::new(name, service_type);
        let registration = self.lookup(&key)?;
        let result = registration.handler.resolve_erased(self);
        self.trace_outcome(&key, result.as_ref().map(|_| ()));
        result
    }

    /// Type-erased form of [`resolve_all`](Self::resolve_all)
    pub fn resolve_all_erased(&self, service_type: ServiceType) -> Result<Vec<AnyService>> {
        self.registrations_of(service_type)
            .into_iter()
            .map(|(key, registration)| {
                let result = registration.handler.resolve_erased(self);
                self.trace_outcome(&key, result.as_ref().map(|_| ()));
                result
            })
            .collect()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Whether a registration of `T` exists under `name`
    pub fn is_registered<T>(&self, name: Option<&str>) -> bool
    where
        T: ?Sized + 'static,
    {
        self.contains_key(&ServiceKey::of::<T>(name))
    }

    /// Whether a registration exists under `key`
    pub fn contains_key(&self, key: &ServiceKey) -> bool {
        self.services.contains_key(key)
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the container has no registrations
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// All registrations, in registration order
    pub fn registrations(&self) -> Vec<RegistrationInfo> {
        let mut entries: Vec<_> = self
            .services
            .iter()
            .map(|entry| {
                let registration = entry.value();
                (
                    registration.sequence,
                    RegistrationInfo {
                        key: entry.key().clone(),
                        lifetime: registration.handler.lifetime(),
                        initialized: registration.handler.is_initialized(),
                    },
                )
            })
            .collect();
        entries.sort_by_key(|(sequence, _)| *sequence);
        entries.into_iter().map(|(_, info)| info).collect()
    }

    // The shard guard is dropped before returning, never held across a factory call.
    fn lookup(&self, key: &ServiceKey) -> Result<Registration> {
        match self.services.get(key) {
            Some(entry) => Ok(entry.value().clone()),
            None => {
                debug!(service = %key, "No registration found");
                Err(Error::unknown_registration(key.clone()))
            }
        }
    }

    fn registrations_of(&self, service_type: ServiceType) -> Vec<(ServiceKey, Registration)> {
        let mut matching: Vec<_> = self
            .services
            .iter()
            .filter(|entry| entry.key().service_type() == service_type)
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        matching.sort_by_key(|(_, registration)| registration.sequence);
        matching
    }

    fn trace_outcome(&self, key: &ServiceKey, outcome: std::result::Result<(), &Error>) {
        match outcome {
            Ok(()) if self.config.trace_resolutions => {
                trace!(service = %key, "Resolved service");
            }
            Ok(()) => {}
            Err(err) => {
                if let Some(first) = err.first_failure() {
                    debug!(service = %key, first_failure = %first, "Resolution failed");
                }
            }
        }
    }
}

fn typed_handler<'a, T>(key: &ServiceKey, registration: &'a Registration) -> Result<&'a ServiceHandler<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    registration
        .handler
        .as_any()
        .downcast_ref::<ServiceHandler<T>>()
        .ok_or_else(|| Error::type_mismatch(key.clone(), ServiceType::of::<T>()))
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("registrations", &self.services.len())
            .field("config", &self.config)
            .finish()
    }
}
