//! Service handlers - instance production strategies
//!
//! A [`ServiceHandler`] owns the strategy a registration uses to produce
//! instances of its service type:
//!
//! | Lifetime | Behavior |
//! |----------|----------|
//! | `Transient` | Invokes the factory on every resolution |
//! | `Singleton` | Invokes the factory once, caches the instance |
//! | `Instance` | Returns the instance given at registration |
//!
//! Factory failures are wrapped exactly once per level in a
//! [`ResolveError`](burrow_domain::ResolveError) naming the key being
//! constructed. A singleton whose factory fails stays empty and retries on
//! the next resolution.

use burrow_domain::error::{BoxError, Error, Result};
use burrow_domain::{AnyService, Lifetime, ServiceKey};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::registry::Container;

/// Factory producing an instance of `T` from the container it is registered in
pub type Factory<T> = Box<dyn Fn(&Container) -> std::result::Result<Arc<T>, BoxError> + Send + Sync>;

enum Strategy<T: ?Sized> {
    Transient(Factory<T>),
    Singleton {
        factory: Factory<T>,
        instance: OnceCell<Arc<T>>,
    },
    Instance(Arc<T>),
}

/// Registration a handler has been installed under
#[derive(Debug, Clone)]
struct Owner {
    container_id: u64,
    key: ServiceKey,
}

/// Instance production strategy for one registration of `T`
///
/// A handler belongs to exactly one registration. Installing it a second
/// time, in the same container or another one, fails with
/// [`Error::OwnerAlreadyBound`].
pub struct ServiceHandler<T: ?Sized> {
    strategy: Strategy<T>,
    owner: OnceCell<Owner>,
}

impl<T: ?Sized> ServiceHandler<T> {
    /// Lifetime implemented by this handler
    pub fn lifetime(&self) -> Lifetime {
        match self.strategy {
            Strategy::Transient(_) => Lifetime::Transient,
            Strategy::Singleton { .. } => Lifetime::Singleton,
            Strategy::Instance(_) => Lifetime::Instance,
        }
    }

    /// Whether a resolution would return an already existing instance
    pub fn is_initialized(&self) -> bool {
        match &self.strategy {
            Strategy::Transient(_) => false,
            Strategy::Singleton { instance, .. } => instance.get().is_some(),
            Strategy::Instance(_) => true,
        }
    }

    /// Key of the registration this handler is installed under
    pub fn key(&self) -> Option<&ServiceKey> {
        self.owner.get().map(|owner| &owner.key)
    }

    /// Id of the container this handler is installed in
    pub fn owner_id(&self) -> Option<u64> {
        self.owner.get().map(|owner| owner.container_id)
    }
}

impl<T: ?Sized + Send + Sync + 'static> ServiceHandler<T> {
    /// Handler creating a new instance on every resolution
    pub fn transient<F>(factory: F) -> Self
    where
        F: Fn(&Container) -> std::result::Result<Arc<T>, BoxError> + Send + Sync + 'static,
    {
        Self::with_strategy(Strategy::Transient(Box::new(factory)))
    }

    /// Handler creating one instance on first resolution and returning it thereafter
    pub fn singleton<F>(factory: F) -> Self
    where
        F: Fn(&Container) -> std::result::Result<Arc<T>, BoxError> + Send + Sync + 'static,
    {
        Self::with_strategy(Strategy::Singleton {
            factory: Box::new(factory),
            instance: OnceCell::new(),
        })
    }

    /// Handler returning `instance` on every resolution
    pub fn instance(instance: Arc<T>) -> Self {
        Self::with_strategy(Strategy::Instance(instance))
    }

    fn with_strategy(strategy: Strategy<T>) -> Self {
        Self {
            strategy,
            owner: OnceCell::new(),
        }
    }

    /// Record the owning container and registration key
    ///
    /// Succeeds once per handler.
    pub fn bind_owner(&self, container_id: u64, key: ServiceKey) -> Result<()> {
        self.owner
            .set(Owner {
                container_id,
                key: key.clone(),
            })
            .map_err(|_| {
                let owner = self
                    .key()
                    .cloned()
                    .unwrap_or_else(ServiceKey::unnamed::<T>);
                Error::owner_already_bound(key, owner)
            })
    }

    // Fresh handlers only, so there is no previous owner to conflict with.
    pub(crate) fn owned_by(self, container_id: u64, key: ServiceKey) -> Self {
        Self {
            strategy: self.strategy,
            owner: OnceCell::with_value(Owner { container_id, key }),
        }
    }

    /// Produce an instance according to the handler's strategy
    ///
    /// A bound handler only resolves through its owning container and fails
    /// with [`Error::ForeignContainer`] otherwise.
    pub fn get_instance(&self, container: &Container) -> Result<Arc<T>> {
        if let Some(owner) = self.owner.get()
            && owner.container_id != container.id()
        {
            return Err(Error::foreign_container(
                owner.key.clone(),
                owner.container_id,
                container.id(),
            ));
        }
        match &self.strategy {
            Strategy::Transient(factory) => self.create(factory, container),
            Strategy::Singleton { factory, instance } => instance
                .get_or_try_init(|| self.create(factory, container))
                .map(Arc::clone),
            Strategy::Instance(instance) => Ok(Arc::clone(instance)),
        }
    }

    fn create(&self, factory: &Factory<T>, container: &Container) -> Result<Arc<T>> {
        factory(container).map_err(|failure| {
            let key = self.resolve_key();
            debug!(service = %key, error = %failure, "Service factory failed");
            Error::resolve(key, failure)
        })
    }

    fn resolve_key(&self) -> ServiceKey {
        self.key().cloned().unwrap_or_else(ServiceKey::unnamed::<T>)
    }
}

impl<T: ?Sized> fmt::Debug for ServiceHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandler")
            .field("lifetime", &self.lifetime())
            .field("owner", &self.owner.get())
            .finish()
    }
}

/// Type-erased view of a handler, as stored by the container
pub(crate) trait ErasedHandler: Send + Sync {
    fn lifetime(&self) -> Lifetime;

    fn is_initialized(&self) -> bool;

    fn resolve_erased(&self, container: &Container) -> Result<AnyService>;

    fn as_any(&self) -> &dyn Any;
}

impl<T: ?Sized + Send + Sync + 'static> ErasedHandler for ServiceHandler<T> {
    fn lifetime(&self) -> Lifetime {
        ServiceHandler::lifetime(self)
    }

    fn is_initialized(&self) -> bool {
        ServiceHandler::is_initialized(self)
    }

    fn resolve_erased(&self, container: &Container) -> Result<AnyService> {
        let instance = self.get_instance(container)?;
        Ok(Box::new(instance))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
