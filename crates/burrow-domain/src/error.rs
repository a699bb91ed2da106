//! Error handling types
//!
//! Resolution failures form a chain. A factory that fails is wrapped once in
//! a [`ResolveError`] carrying the key being constructed. When the failure
//! came from a nested resolution against the same container, the nested
//! `ResolveError` becomes the source of the outer one, so the chain runs
//! from the outermost requested key down to the key whose factory actually
//! broke. [`ResolveError::first_failure`] walks that chain.

use crate::constants::{ORIGINAL_FAILURE_SEPARATOR, RESOLVE_FAILURE_PREFIX};
use crate::key::{ServiceKey, ServiceType};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Boxed failure raised by a service factory
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Burrow
#[derive(Error, Debug)]
pub enum Error {
    /// Resolution found no handler for the requested key
    #[error("No registration found for {key}.")]
    UnknownRegistration {
        /// The requested key
        key: ServiceKey,
    },

    /// A factory failed while producing an instance
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A handler was installed a second time
    #[error("Cannot register {key}: handler is already owned by registration {owner}")]
    OwnerAlreadyBound {
        /// Key the handler was being installed under
        key: ServiceKey,
        /// Key the handler is already installed under
        owner: ServiceKey,
    },

    /// A handler was asked to resolve through a container that does not own it
    #[error("Cannot resolve {key}: handler belongs to container {owner}, not {container}")]
    ForeignContainer {
        /// Key the handler is installed under
        key: ServiceKey,
        /// Id of the owning container
        owner: u64,
        /// Id of the container passed in
        container: u64,
    },

    /// A type-erased instance did not hold the requested type
    #[error("Instance resolved for {key} is not an instance of {expected}")]
    TypeMismatch {
        /// Key that was resolved
        key: ServiceKey,
        /// Type the caller asked for
        expected: ServiceType,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O failure outside the registry, such as reading or writing config files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Logging subscriber setup error
    #[error("Logging error: {message}")]
    Logging {
        /// Description of the logging error
        message: String,
    },
}

impl Error {
    /// Create an unknown registration error
    pub fn unknown_registration(key: ServiceKey) -> Self {
        Self::UnknownRegistration { key }
    }

    /// Wrap a factory failure raised while constructing `key`
    pub fn resolve<E: Into<BoxError>>(key: ServiceKey, source: E) -> Self {
        Self::Resolve(ResolveError::new(key, source))
    }

    /// Create an owner rebinding error
    pub fn owner_already_bound(key: ServiceKey, owner: ServiceKey) -> Self {
        Self::OwnerAlreadyBound { key, owner }
    }

    /// Create a foreign container error
    pub fn foreign_container(key: ServiceKey, owner: u64, container: u64) -> Self {
        Self::ForeignContainer {
            key,
            owner,
            container,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(key: ServiceKey, expected: ServiceType) -> Self {
        Self::TypeMismatch { key, expected }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: StdError + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: StdError + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a logging error
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Key this error was raised for, if it concerns a registration
    pub fn key(&self) -> Option<&ServiceKey> {
        match self {
            Self::UnknownRegistration { key }
            | Self::OwnerAlreadyBound { key, .. }
            | Self::ForeignContainer { key, .. }
            | Self::TypeMismatch { key, .. } => Some(key),
            Self::Resolve(err) => Some(err.key()),
            Self::Configuration { .. } | Self::Io { .. } | Self::Logging { .. } => None,
        }
    }

    /// Innermost failing key of a resolve chain
    pub fn first_failure(&self) -> Option<&ServiceKey> {
        match self {
            Self::Resolve(err) => Some(err.first_failure()),
            _ => None,
        }
    }

    /// Whether this is an unknown registration error
    pub fn is_unknown_registration(&self) -> bool {
        matches!(self, Self::UnknownRegistration { .. })
    }
}

/// A factory failure, wrapped with the key being constructed
#[derive(Error, Debug)]
pub struct ResolveError {
    key: ServiceKey,
    source: BoxError,
}

impl ResolveError {
    /// Wrap `source` as the failure of constructing `key`
    pub fn new<E: Into<BoxError>>(key: ServiceKey, source: E) -> Self {
        Self {
            key,
            source: source.into(),
        }
    }

    /// Key whose factory raised this error
    pub fn key(&self) -> &ServiceKey {
        &self.key
    }

    /// Name of the failing registration
    pub fn name(&self) -> Option<&str> {
        self.key.name()
    }

    /// Type of the failing registration
    pub fn service_type(&self) -> ServiceType {
        self.key.service_type()
    }

    /// The failure the factory raised
    pub fn failure(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.source
    }

    /// Key whose factory raised the root cause
    ///
    /// Follows nested resolve failures down to the last one whose source is
    /// not itself a resolve failure. Equals [`key`](Self::key) when the
    /// factory failed on its own.
    pub fn first_failure(&self) -> &ServiceKey {
        match nested_resolve_error(&*self.source) {
            Some(inner) => inner.first_failure(),
            None => &self.key,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.first_failure();
        if first == &self.key {
            write!(f, "{} {}", RESOLVE_FAILURE_PREFIX, self.key)
        } else {
            write!(
                f,
                "{} {}{} {}",
                RESOLVE_FAILURE_PREFIX, self.key, ORIGINAL_FAILURE_SEPARATOR, first
            )
        }
    }
}

// Factories box whatever `?` hands them, so a nested failure arrives either
// as the crate error or as a bare ResolveError.
fn nested_resolve_error<'a>(
    err: &'a (dyn StdError + Send + Sync + 'static),
) -> Option<&'a ResolveError> {
    if let Some(Error::Resolve(inner)) = err.downcast_ref::<Error>() {
        return Some(inner);
    }
    err.downcast_ref::<ResolveError>()
}
