use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{RemoteError, Result};
use crate::http_client::HttpUtils;
use crate::traits::DetailSource;
use crate::types::DetailPayload;

/// How the record id is put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStyle {
    /// `GET <url>?id=<id>`
    IdParam,
    /// `GET <url>?action=<action>&id=<id>`
    Action(String),
}

#[derive(Debug, Clone)]
pub struct DetailEndpoint {
    pub name: String,
    pub url: String,
    pub style: DetailStyle,
    /// Key wrapping the payload in the response, e.g. `document`.
    pub unwrap_key: Option<String>,
}

impl DetailEndpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            style: DetailStyle::IdParam,
            unwrap_key: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.style = DetailStyle::Action(action.into());
        self
    }

    #[must_use]
    pub fn unwrapping(mut self, key: impl Into<String>) -> Self {
        self.unwrap_key = Some(key.into());
        self
    }

    fn query_for<'a>(&'a self, id: &'a str) -> Vec<(&'a str, &'a str)> {
        match &self.style {
            DetailStyle::IdParam => vec![("id", id)],
            DetailStyle::Action(action) => vec![("action", action.as_str()), ("id", id)],
        }
    }
}

/// `DetailSource` over a `GET` endpoint.
pub struct HttpDetailSource {
    client: Client,
    endpoint: DetailEndpoint,
}

impl HttpDetailSource {
    pub fn new(client: Client, endpoint: DetailEndpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl DetailSource for HttpDetailSource {
    fn name(&self) -> &str {
        &self.endpoint.name
    }

    async fn fetch_detail(&self, id: &str) -> Result<DetailPayload> {
        let request = self
            .client
            .get(&self.endpoint.url)
            .query(&self.endpoint.query_for(id));

        let (status, text) =
            HttpUtils::execute_request(request, self.name(), "GET", &self.endpoint.url).await?;
        let body = HttpUtils::check_envelope(status, &text, self.name())?;

        extract_detail(body, self.endpoint.unwrap_key.as_deref(), self.name())
    }
}

/// Turn a detail response into a payload, unwrapping it if configured.
pub fn extract_detail(body: Value, unwrap_key: Option<&str>, source: &str) -> Result<DetailPayload> {
    let payload = match unwrap_key {
        None => body,
        Some(key) => match body {
            Value::Object(mut map) => map.remove(key).unwrap_or(Value::Null),
            _ => Value::Null,
        },
    };

    if payload.is_object() {
        Ok(DetailPayload(payload))
    } else {
        Err(RemoteError::MalformedResponse {
            source: source.to_string(),
            detail: match unwrap_key {
                Some(key) => format!("missing `{key}` object in response"),
                None => "detail response is not an object".to_string(),
            },
        })
    }
}
