//! Container configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Container behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Emit a trace event for every successful resolution
    pub trace_resolutions: bool,

    /// Log replaced registrations at warn instead of debug level
    pub warn_on_replace: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            trace_resolutions: DEFAULT_TRACE_RESOLUTIONS,
            warn_on_replace: DEFAULT_WARN_ON_REPLACE,
        }
    }
}
