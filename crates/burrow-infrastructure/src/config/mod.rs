//! Configuration
//!
//! Typed configuration for the container and its logging, loaded with
//! Figment from defaults, an optional TOML file and `BURROW_` environment
//! variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
