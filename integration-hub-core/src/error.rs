//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use integration_hub_provider::RemoteError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Input rejected before any request was made
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The session has no token
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Login rejected by the auth endpoint
    #[error("{0}")]
    InvalidCredentials(String),

    /// Storage layer error (token store, export files)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration could not be parsed or is out of range
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Remote call failed (converting from library)
    #[error("{0}")]
    Remote(#[from] RemoteError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, remote verdicts) rather
    /// than a fault. Used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::NotAuthenticated | Self::InvalidCredentials(_) => true,
            Self::Remote(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) | Self::ConfigError(_) => false,
        }
    }

    /// Text shown to the user in a notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
