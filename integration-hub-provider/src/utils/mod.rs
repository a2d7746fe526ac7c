//! Utility modules.

/// Masking and truncation of response bodies before they are logged.
pub mod log_sanitizer;
