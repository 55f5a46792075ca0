//! Error types for feed-resolver
//!
//! The error taxonomy mirrors how failures are handled during resolution:
//! - Configuration errors (missing directory secrets) are fatal and never retried
//! - Primary directory search failures propagate, since a broken primary index
//!   invalidates the whole resolution strategy
//! - Everything else (fallback search, RSS fetch, Spotify lookup, parse
//!   failures) is degraded to a neutral result inside the components and never
//!   surfaces as an `Error`

use thiserror::Error;

/// Result type alias for feed-resolver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for feed-resolver
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "directory.api_key")
        key: Option<String>,
    },

    /// Primary directory search returned a non-success HTTP status
    #[error("directory search failed with HTTP {status}")]
    DirectorySearch {
        /// The HTTP status code returned by the directory API
        status: u16,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error for a missing required setting
    pub fn missing_config(key: &str) -> Self {
        Error::Config {
            message: format!("missing required setting: {}", key),
            key: Some(key.to_string()),
        }
    }
}
