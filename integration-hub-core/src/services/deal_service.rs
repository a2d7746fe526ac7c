//! CRM deal actions: stage rollback, user enrichment, action history

use std::sync::Arc;

use integration_hub_provider::{CommandRequest, CommandSink, Record, RecordShape, extract_records};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::EnrichUsersResult;

const HISTORY_LIMIT: &str = "50";

/// Deal-level commands
pub struct DealService {
    rollback: Arc<dyn CommandSink>,
    enrich: Arc<dyn CommandSink>,
    history: Arc<dyn CommandSink>,
}

impl DealService {
    #[must_use]
    pub fn new(
        rollback: Arc<dyn CommandSink>,
        enrich: Arc<dyn CommandSink>,
        history: Arc<dyn CommandSink>,
    ) -> Self {
        Self {
            rollback,
            enrich,
            history,
        }
    }

    /// Move a deal back to `target_stage_id`. Returns the remote message.
    pub async fn rollback(&self, deal_id: &str, target_stage_id: &str) -> CoreResult<String> {
        if deal_id.trim().is_empty() || target_stage_id.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "deal id and target stage are required".to_string(),
            ));
        }

        let request = CommandRequest::plain()
            .param("deal_id", deal_id)
            .param("target_stage_id", target_stage_id);
        let body = self.rollback.post(request).await?;

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| format!("Deal {deal_id} rolled back"), str::to_string);
        log::info!("Deal {deal_id} rolled back to {target_stage_id}");
        Ok(message)
    }

    /// Fill in user names on recorded deal changes.
    pub async fn enrich_users(&self) -> CoreResult<EnrichUsersResult> {
        let body = self.enrich.post(CommandRequest::plain()).await?;
        let result: EnrichUsersResult = serde_json::from_value(body)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        log::info!("User enrichment processed {} users", result.users_processed);
        Ok(result)
    }

    /// Actions recorded for one deal, newest first as the server sends them.
    pub async fn history(&self, deal_id: &str) -> CoreResult<Vec<Record>> {
        let body = self
            .history
            .get(&[("deal_id", deal_id), ("limit", HISTORY_LIMIT)])
            .await?;
        // The backend omits the key when the deal has no history
        if body.get("logs").is_none() {
            return Ok(Vec::new());
        }
        let records = extract_records(&body, "logs", &RecordShape::new("id"), self.history.name())?;
        Ok(records)
    }
}
