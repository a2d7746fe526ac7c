//! 类型定义模块

mod connection;
mod deal;
mod document;
mod notification;
mod screen;

pub use connection::{Connection, ConnectionForm, ConnectionStatus};
pub use deal::{DirectApiProbe, EnrichUsersResult};
pub use document::{
    DocumentExport, EnrichSummary, ExportedDocument, NOT_SYNCED, SYNC_LIMITS, needs_enrichment,
};
pub use notification::{Notification, NotificationLevel};
pub use screen::{ScreenKind, ViewCapabilities};

// Re-export provider 库的公共类型
pub use integration_hub_provider::{
    CommandRequest, DetailPayload, QueryFilter, Record, RecordShape, SourceMode,
};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept ids sent either as strings or as numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integration_hub_provider::scalar_to_string(&value).unwrap_or_default())
}
