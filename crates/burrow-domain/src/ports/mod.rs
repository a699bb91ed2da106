//! Domain Port Interfaces
//!
//! Boundary contracts implemented by adapters that expose the registry to
//! the outside world.

/// Service-locator boundary
pub mod locator;

pub use locator::{AnyService, ServiceLocator};
