//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `burrow_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "burrow.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "burrow";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BURROW";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "BURROW_LOG";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "burrow";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Whether replacing a registration is logged at warn level by default
pub const DEFAULT_WARN_ON_REPLACE: bool = true;

/// Whether successful resolutions are traced by default
pub const DEFAULT_TRACE_RESOLUTIONS: bool = false;
