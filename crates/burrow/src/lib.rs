//! # Burrow
//!
//! A minimal inversion-of-control registry. Register factories keyed by a
//! service type (optionally qualified by a name), then resolve instances by
//! the same key.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use burrow::Container;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! let container = Container::new();
//! container.register_singleton(|_| Ok(Arc::new(English) as Arc<dyn Greeter>));
//!
//! let greeter = container.resolve::<dyn Greeter>().unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - keys, lifetimes, the error chain and the locator port
//! - `infrastructure` - container, handlers, locator adapter, config and logging

/// Domain layer - keys, lifetimes, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use burrow_domain::*;
}

/// Infrastructure layer - container, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use burrow_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{
    AnyService, BoxError, Error, Lifetime, ResolveError, Result, ServiceKey, ServiceLocator,
    ServiceType,
};

// Re-export the registry at the crate root
pub use infrastructure::{Container, ContainerServiceLocator, RegistrationInfo, ServiceHandler};
