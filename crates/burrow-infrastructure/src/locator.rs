//! Service-locator adapter
//!
//! Exposes a [`Container`] through the [`ServiceLocator`] port so code
//! written against a generic locator can pull services out of the registry.
//! The adapter forwards and adds nothing.

use burrow_domain::error::Result;
use burrow_domain::{AnyService, ServiceLocator, ServiceType};
use std::sync::Arc;

use crate::container::Container;

/// [`ServiceLocator`] backed by a [`Container`]
#[derive(Debug, Clone)]
pub struct ContainerServiceLocator {
    container: Arc<Container>,
}

impl ContainerServiceLocator {
    /// Wrap a shared container
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    /// Container behind this locator
    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }
}

impl ServiceLocator for ContainerServiceLocator {
    fn get_instance(&self, service_type: ServiceType, key: Option<&str>) -> Result<AnyService> {
        self.container.resolve_erased(key, service_type)
    }

    fn get_all_instances(&self, service_type: ServiceType) -> Result<Vec<AnyService>> {
        self.container.resolve_all_erased(service_type)
    }
}
