//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{ContainerConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Container behavior
    pub container: ContainerConfig,
}
