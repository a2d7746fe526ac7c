use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{RemoteError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ListSource;
use crate::types::{QueryFilter, Record, RecordShape};

/// Which filter fields an endpoint accepts as query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterForwarding {
    pub source: bool,
    pub status: bool,
    pub search: bool,
}

impl FilterForwarding {
    pub const ALL: Self = Self {
        source: true,
        status: true,
        search: true,
    };
    pub const NONE: Self = Self {
        source: false,
        status: false,
        search: false,
    };
}

/// Static description of one collection endpoint.
#[derive(Debug, Clone)]
pub struct ListEndpoint {
    /// Endpoint name used in logs and errors.
    pub name: String,
    pub url: String,
    /// Top-level key holding the array (`logs`, `changes`, `documents`).
    pub collection_key: String,
    pub shape: RecordShape,
    /// Parameters sent on every request. They win over filter-derived ones.
    pub fixed_params: Vec<(String, String)>,
    pub forwarding: FilterForwarding,
}

impl ListEndpoint {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        collection_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            collection_key: collection_key.into(),
            shape: RecordShape::default(),
            fixed_params: Vec::new(),
            forwarding: FilterForwarding::ALL,
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: RecordShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fixed_params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_forwarding(mut self, forwarding: FilterForwarding) -> Self {
        self.forwarding = forwarding;
        self
    }

    /// Query string pairs for one fetch.
    pub fn query_for(&self, filter: &QueryFilter) -> Vec<(String, String)> {
        let mut query = self.fixed_params.clone();
        let mut push = |key: &str, value: &str| {
            if !query.iter().any(|(k, _)| k == key) {
                query.push((key.to_string(), value.to_string()));
            }
        };

        if self.forwarding.source {
            push("source", filter.source_mode.as_str());
        }
        if self.forwarding.status
            && let Some(status) = filter.status()
        {
            push("status", status);
        }
        if self.forwarding.search
            && let Some(search) = filter.search()
        {
            push("search", search);
        }
        query
    }
}

/// `ListSource` over a plain `GET` endpoint.
pub struct HttpListSource {
    client: Client,
    endpoint: ListEndpoint,
}

impl HttpListSource {
    pub fn new(client: Client, endpoint: ListEndpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &ListEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl ListSource for HttpListSource {
    fn name(&self) -> &str {
        &self.endpoint.name
    }

    async fn fetch_list(&self, filter: &QueryFilter) -> Result<Vec<Record>> {
        let query = self.endpoint.query_for(filter);
        let request = self.client.get(&self.endpoint.url).query(&query);

        let (status, text) =
            HttpUtils::execute_request(request, self.name(), "GET", &self.endpoint.url).await?;
        let body = HttpUtils::check_envelope(status, &text, self.name())?;

        extract_records(
            &body,
            &self.endpoint.collection_key,
            &self.endpoint.shape,
            self.name(),
        )
    }
}

/// Pull the record array out of a list response.
///
/// A missing key is malformed; an explicit `null` is an empty collection.
/// Items without a usable id are skipped with a warning.
pub fn extract_records(
    body: &Value,
    collection_key: &str,
    shape: &RecordShape,
    source: &str,
) -> Result<Vec<Record>> {
    let items = match body.get(collection_key) {
        None => {
            return Err(RemoteError::MalformedResponse {
                source: source.to_string(),
                detail: format!("missing `{collection_key}` in response"),
            });
        }
        Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(RemoteError::MalformedResponse {
                source: source.to_string(),
                detail: format!("`{collection_key}` is not an array: {other}"),
            });
        }
    };

    let total = items.len();
    let records: Vec<Record> = items
        .iter()
        .cloned()
        .filter_map(|item| Record::from_json(item, shape))
        .collect();

    if records.len() < total {
        log::warn!(
            "[{source}] Skipped {} item(s) without `{}`",
            total - records.len(),
            shape.id_field
        );
    }
    Ok(records)
}
