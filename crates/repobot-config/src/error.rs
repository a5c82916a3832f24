//! Configuration error types.
//!
//! Lookups into a [`ConfigStore`](crate::ConfigStore) never fail: missing
//! configuration is reported as `None`. These errors cover loading a
//! document and decoding values into typed structs.

use thiserror::Error;

/// Errors that can occur while loading or decoding configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration document contained invalid JSON.
    #[error("failed to parse config file: {0}")]
    Parse(#[source] serde_json::Error),

    /// The top-level JSON value was not an object keyed by organization.
    #[error("config root must be a JSON object, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// A repository reference was not of the form `org/name`.
    #[error("invalid repository '{input}': expected <org>/<name>")]
    InvalidRepoRef {
        /// The text that failed to parse.
        input: String,
    },

    /// A configuration value did not match the requested type.
    #[error("invalid configuration for {repo}: {source}")]
    Decode {
        /// The repository whose settings failed to decode, as `org/name`.
        repo: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
