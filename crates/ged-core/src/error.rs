//! # Error Types
//!
//! Operational errors for the workspace. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Conformance problems in a record graph are never errors. They are
//!   reported as findings by `ged-validate`.
//! - Errors here cover the edges: reading options, loading and storing
//!   graphs.

use thiserror::Error;

/// Top-level error type for loading, storing, and configuring.
#[derive(Error, Debug)]
pub enum GedError {
    /// Validation options could not be loaded or are out of range.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A record graph could not be decoded from or encoded to JSON/YAML.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for GedError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Error loading or checking [`ValidationOptions`](crate::ValidationOptions).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The options document is not valid YAML or has unknown fields.
    #[error("failed to parse options: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The options file could not be read.
    #[error("failed to read options file '{path}': {source}")]
    Read {
        /// Path of the options file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A field holds a value outside its allowed range.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Name of the offending option.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
