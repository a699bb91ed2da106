//! Service container
//!
//! ```text
//! register(name, factory) ──► ServiceKey(name, T) ──► ServiceHandler<T>
//!                                                         │
//! resolve::<T>(name) ───────► lookup ─────────────────────┘
//!                                │                  get_instance(&Container)
//!                                ▼                         │
//!                      UnknownRegistration        factory(&Container)
//!                                                          │  nested resolve
//!                                                          ▼
//!                                                 ResolveError chain
//! ```

pub mod handler;
pub mod registry;

pub use handler::{Factory, ServiceHandler};
pub use registry::{Container, RegistrationInfo};
