//! # integration-hub-provider
//!
//! HTTP sources for the CRM and ERP endpoints behind the Integration Hub
//! dashboard: workflow-run logs, timeline logs, deal changes and ERP order
//! documents.
//!
//! ## Source kinds
//!
//! | Trait | Implementation | Request |
//! |-------|----------------|---------|
//! | [`ListSource`] | [`HttpListSource`] | `GET <url>?limit=..&source=..&status=..&search=..` |
//! | [`DetailSource`] | [`HttpDetailSource`] | `GET <url>?id=..` or `?action=..&id=..` |
//! | [`CommandSink`] | [`HttpCommandSink`] | `POST <url>` with `{ "action": .., .. }`, or action-style `GET` |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use integration_hub_provider::{
//!     ClientOptions, HttpListSource, ListEndpoint, ListSource, QueryFilter, create_http_client,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_http_client(&ClientOptions::default())?;
//!     let source = HttpListSource::new(
//!         client,
//!         ListEndpoint::new("workflow-runs", "http://127.0.0.1:8000/workflow-logs", "logs")
//!             .with_param("limit", "100"),
//!     );
//!
//!     for record in source.fetch_list(&QueryFilter::with_status("running")).await? {
//!         println!("{} {:?}", record.id, record.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, RemoteError>`](RemoteError):
//!
//! - [`RemoteError::NetworkError`]: the request could not be sent or read
//! - [`RemoteError::Timeout`]: the configured timeout expired
//! - [`RemoteError::RemoteFailure`]: non-2xx, `success: false` or an `error` field
//! - [`RemoteError::MalformedResponse`]: the body is not the expected JSON
//!
//! Nothing is retried automatically.

mod error;
mod http_client;
mod sources;
mod traits;
mod types;
mod utils;

pub use error::{RemoteError, Result};

pub use http_client::{
    ClientOptions, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    FALLBACK_FAILURE_MESSAGE, HttpUtils, create_http_client,
};

pub use sources::{
    DetailEndpoint, DetailStyle, FilterForwarding, HttpCommandSink, HttpDetailSource,
    HttpListSource, ListEndpoint, extract_detail, extract_records,
};

pub use traits::{CommandSink, DetailSource, ListSource};

pub use types::{
    CommandRequest, DetailPayload, QueryFilter, Record, RecordShape, SourceMode, scalar_to_string,
};

pub use utils::log_sanitizer;
