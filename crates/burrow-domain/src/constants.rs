//! Domain constants

/// Prefix used when rendering a failed construction
pub const RESOLVE_FAILURE_PREFIX: &str = "Failed constructing";

/// Separator between the failing key and the original failure
pub const ORIGINAL_FAILURE_SEPARATOR: &str = "; original failure at";
