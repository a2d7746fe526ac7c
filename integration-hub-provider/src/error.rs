use serde::{Deserialize, Serialize};

/// Unified error type for every remote call.
///
/// Each variant carries a `source` naming the endpoint that produced it
/// (e.g. `workflow-logs`), plus variant-specific context. Network failures,
/// HTTP errors and unusable payloads all end up here so callers only have one
/// thing to surface.
///
/// Nothing is retried automatically: the next manual or timer-driven call is
/// the retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RemoteError {
    /// The request could not be sent or completed (DNS failure, connection
    /// refused, body read interrupted, ...).
    NetworkError {
        /// Endpoint that produced the error.
        source: String,
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the configured timeout.
    Timeout {
        /// Endpoint that produced the error.
        source: String,
        /// Error details.
        detail: String,
    },

    /// The remote side answered, but signalled failure: a non-2xx status, a
    /// `success: false` flag or an `error` field.
    RemoteFailure {
        /// Endpoint that produced the error.
        source: String,
        /// HTTP status code of the response.
        status: Option<u16>,
        /// Human-readable message taken from the payload, or a generic fallback.
        message: String,
    },

    /// The payload could not be parsed or lacks the expected shape.
    MalformedResponse {
        /// Endpoint that produced the error.
        source: String,
        /// Details about what was missing or invalid.
        detail: String,
    },
}

impl RemoteError {
    /// Name of the endpoint that produced the error.
    pub fn source_name(&self) -> &str {
        match self {
            Self::NetworkError { source, .. }
            | Self::Timeout { source, .. }
            | Self::RemoteFailure { source, .. }
            | Self::MalformedResponse { source, .. } => source,
        }
    }

    /// Message shown to the user in notifications and inline error banners.
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkError { detail, .. } => format!("Network error: {detail}"),
            Self::Timeout { .. } => "Request timed out".to_string(),
            Self::RemoteFailure { message, .. } => message.clone(),
            Self::MalformedResponse { detail, .. } => format!("Unexpected response: {detail}"),
        }
    }

    /// Whether the failure comes from the remote side's own verdict rather than
    /// from transport or parsing. Used for log levels only.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::RemoteFailure { .. })
    }
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { source, detail } => {
                write!(f, "[{source}] Network error: {detail}")
            }
            Self::Timeout { source, detail } => {
                write!(f, "[{source}] Request timeout: {detail}")
            }
            Self::RemoteFailure {
                source,
                status,
                message,
            } => {
                if let Some(code) = status {
                    write!(f, "[{source}] Remote failure (HTTP {code}): {message}")
                } else {
                    write!(f, "[{source}] Remote failure: {message}")
                }
            }
            Self::MalformedResponse { source, detail } => {
                write!(f, "[{source}] Malformed response: {detail}")
            }
        }
    }
}

impl std::error::Error for RemoteError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RemoteError>;
