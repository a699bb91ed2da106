//! # Infrastructure Layer
//!
//! Runtime machinery of the Burrow registry.
//!
//! ### Registry
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | `Container` registry and `ServiceHandler` strategies |
//! | [`locator`] | `ServiceLocator` adapter over a container |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod locator;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, ContainerConfig, LoggingConfig};
pub use container::{Container, RegistrationInfo, ServiceHandler};
pub use error_ext::ErrorContext;
pub use locator::ContainerServiceLocator;
