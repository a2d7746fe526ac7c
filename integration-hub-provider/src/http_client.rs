//! Shared HTTP plumbing for every remote endpoint.
//!
//! Each source builds its own `RequestBuilder` (URL, query, body) and hands it
//! to [`HttpUtils::execute_request`], which sends it, logs it and maps
//! transport failures. [`HttpUtils::check_envelope`] then applies the common
//! response rules shared by all CRM and ERP endpoints:
//!
//! - non-2xx status is a failure, with the remote `message` or `error` text
//! - `success: false` or a non-empty `error` field is a failure even on 2xx
//! - a 2xx body that is not JSON is a malformed response
//!
//! Nothing is retried here.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::error::{RemoteError, Result};
use crate::utils::log_sanitizer::sanitize_for_log;

/// Default connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Message used when a failing response carries no text of its own.
pub const FALLBACK_FAILURE_MESSAGE: &str = "request failed";

/// Timeouts applied to every request of one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Create a client with the given timeouts.
///
/// One client is shared by all sources so connections are pooled.
pub fn create_http_client(options: &ClientOptions) -> Result<Client> {
    Client::builder()
        .connect_timeout(options.connect_timeout)
        .timeout(options.request_timeout)
        .build()
        .map_err(|e| RemoteError::NetworkError {
            source: "http-client".to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and read the response body as text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, query, body)
    /// * `source` - endpoint name, for logs and errors
    /// * `method_name` - `GET` / `POST`, for logs
    /// * `url` - request URL, for logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP status
    /// * `Err(RemoteError::Timeout)` / `Err(RemoteError::NetworkError)` otherwise
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{source}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(source, &e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{source}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(source, &e)
            } else {
                RemoteError::NetworkError {
                    source: source.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{source}] Response Body: {}",
            sanitize_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a response body as JSON.
    pub fn parse_json(response_text: &str, source: &str) -> Result<Value> {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source}] JSON parse failed: {e}");
            log::error!("[{source}] Raw response: {}", sanitize_for_log(response_text));
            RemoteError::MalformedResponse {
                source: source.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Apply the common success/failure rules to a response.
    ///
    /// Returns the parsed JSON body when the response counts as a success.
    pub fn check_envelope(status_code: u16, response_text: &str, source: &str) -> Result<Value> {
        if !(200..300).contains(&status_code) {
            // Error pages are often not JSON; fall back to the status code.
            let message = serde_json::from_str::<Value>(response_text)
                .ok()
                .and_then(|body| text_field(&body, "message").or_else(|| text_field(&body, "error")))
                .unwrap_or_else(|| format!("HTTP {status_code}"));
            log::warn!("[{source}] HTTP {status_code}: {message}");
            return Err(RemoteError::RemoteFailure {
                source: source.to_string(),
                status: Some(status_code),
                message,
            });
        }

        let body = Self::parse_json(response_text, source)?;

        let flagged_failure = body.get("success").and_then(Value::as_bool) == Some(false);
        let error_text = text_field(&body, "error");
        if flagged_failure || error_text.is_some() {
            let message = error_text
                .or_else(|| text_field(&body, "message"))
                .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());
            log::warn!("[{source}] Remote reported failure: {message}");
            return Err(RemoteError::RemoteFailure {
                source: source.to_string(),
                status: Some(status_code),
                message,
            });
        }

        Ok(body)
    }
}

fn transport_error(source: &str, e: &reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout {
            source: source.to_string(),
            detail: e.to_string(),
        }
    } else {
        RemoteError::NetworkError {
            source: source.to_string(),
            detail: e.to_string(),
        }
    }
}

/// Non-empty text under `key`. Non-string scalars are stringified.
fn text_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn failure_message(result: Result<Value>) -> (Option<u16>, String) {
        match result {
            Err(RemoteError::RemoteFailure {
                status, message, ..
            }) => (status, message),
            other => panic!("expected RemoteFailure, got {other:?}"),
        }
    }

    #[test]
    fn ok_body_passes_through() {
        let body = HttpUtils::check_envelope(200, r#"{"logs":[],"count":0}"#, "test");
        assert!(matches!(&body, Ok(v) if v["count"] == 0), "{body:?}");
    }

    #[test]
    fn non_2xx_prefers_message_then_error() {
        let r = HttpUtils::check_envelope(500, r#"{"message":"db down","error":"x"}"#, "test");
        assert_eq!(failure_message(r), (Some(500), "db down".to_string()));

        let r = HttpUtils::check_envelope(404, r#"{"error":"not found"}"#, "test");
        assert_eq!(failure_message(r), (Some(404), "not found".to_string()));
    }

    #[test]
    fn non_2xx_without_json_uses_status() {
        let r = HttpUtils::check_envelope(502, "<html>Bad Gateway</html>", "test");
        assert_eq!(failure_message(r), (Some(502), "HTTP 502".to_string()));
    }

    #[test]
    fn success_false_is_failure_on_200() {
        let r = HttpUtils::check_envelope(200, r#"{"success":false,"error":"Invalid limit"}"#, "test");
        assert_eq!(failure_message(r).1, "Invalid limit");

        let r = HttpUtils::check_envelope(200, r#"{"success":false}"#, "test");
        assert_eq!(failure_message(r).1, FALLBACK_FAILURE_MESSAGE);
    }

    #[test]
    fn error_field_is_failure_but_empty_error_is_not() {
        let r = HttpUtils::check_envelope(200, r#"{"logs":[],"error":"token expired"}"#, "test");
        assert_eq!(failure_message(r).1, "token expired");

        let ok = HttpUtils::check_envelope(200, r#"{"logs":[],"error":""}"#, "test");
        assert!(ok.is_ok());
        let ok = HttpUtils::check_envelope(200, r#"{"logs":[],"error":null}"#, "test");
        assert!(ok.is_ok());
    }

    #[test]
    fn invalid_json_on_200_is_malformed() {
        let r = HttpUtils::check_envelope(200, "not json", "test");
        assert!(
            matches!(&r, Err(RemoteError::MalformedResponse { .. })),
            "unexpected result: {r:?}"
        );
    }

    #[test]
    fn client_builds_with_default_options() {
        assert!(create_http_client(&ClientOptions::default()).is_ok());
    }
}
