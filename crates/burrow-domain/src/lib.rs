//! # Burrow Domain
//!
//! Core types of the Burrow service registry. This crate carries no runtime
//! machinery of its own: it defines how services are addressed, how their
//! lifetimes are named, how failures are reported and the boundary trait a
//! service-locator adapter implements.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`key`] | `ServiceType` and `ServiceKey` identities |
//! | [`lifetime`] | Instance lifetime strategies |
//! | [`error`] | Error taxonomy and the nested resolve chain |
//! | [`ports`] | Boundary contracts for external adapters |
//! | [`constants`] | Shared string constants |

pub mod constants;
pub mod error;
pub mod key;
pub mod lifetime;
pub mod ports;

pub use error::{BoxError, Error, ResolveError, Result};
pub use key::{ServiceKey, ServiceType};
pub use lifetime::Lifetime;
pub use ports::{AnyService, ServiceLocator};
