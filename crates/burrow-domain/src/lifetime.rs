//! Instance lifetime strategies

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a registration produces instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// A fresh instance from the factory on every resolution
    Transient,
    /// One lazily created instance shared by every resolution
    Singleton,
    /// A pre-built instance supplied at registration time
    Instance,
}

impl Lifetime {
    /// Lowercase label used in logs and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transient => "transient",
            Self::Singleton => "singleton",
            Self::Instance => "instance",
        }
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
