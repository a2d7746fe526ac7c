//! Shared test helpers: a mock HTTP server plus sources pointed at it.

#![allow(dead_code)]

use std::time::Duration;

use integration_hub_provider::{
    ClientOptions, DetailEndpoint, HttpCommandSink, HttpDetailSource, HttpListSource,
    ListEndpoint, create_http_client,
};
use reqwest::Client;
use wiremock::MockServer;

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Mock server context
pub struct TestContext {
    pub server: MockServer,
    pub client: Client,
}

impl TestContext {
    pub async fn start() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_timeout(request_timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let client = create_http_client(&ClientOptions {
            request_timeout,
            connect_timeout: Duration::from_secs(2),
        })
        .expect("failed to build HTTP client");
        Self { server, client }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    pub fn list_source(&self, endpoint: ListEndpoint) -> HttpListSource {
        HttpListSource::new(self.client.clone(), endpoint)
    }

    pub fn detail_source(&self, endpoint: DetailEndpoint) -> HttpDetailSource {
        HttpDetailSource::new(self.client.clone(), endpoint)
    }

    pub fn command_sink(&self, path: &str) -> HttpCommandSink {
        HttpCommandSink::new(self.client.clone(), "commands", self.url(path))
    }
}
