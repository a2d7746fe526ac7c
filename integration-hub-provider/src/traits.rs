use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{CommandRequest, DetailPayload, QueryFilter, Record};

/// A remote collection endpoint.
///
/// Returns the records matching `filter` in server order.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Endpoint name used in logs and errors.
    fn name(&self) -> &str;

    /// Fetch the current snapshot of the collection.
    async fn fetch_list(&self, filter: &QueryFilter) -> Result<Vec<Record>>;
}

/// A remote endpoint returning the expanded payload of one record.
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Endpoint name used in logs and errors.
    fn name(&self) -> &str;

    /// Fetch the detail payload for `id`.
    async fn fetch_detail(&self, id: &str) -> Result<DetailPayload>;
}

/// A remote endpoint accepting side-effecting commands.
///
/// Responses are returned as raw JSON after the envelope has been checked
/// for `success: false` / `error`.
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Endpoint name used in logs and errors.
    fn name(&self) -> &str;

    /// `POST` a JSON command body.
    async fn post(&self, request: CommandRequest) -> Result<Value>;

    /// Action-style `GET` with query parameters.
    async fn get(&self, params: &[(&str, &str)]) -> Result<Value>;
}
