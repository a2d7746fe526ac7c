//! Backend diagnostics for the workflow-log endpoint

use std::sync::Arc;

use integration_hub_provider::CommandSink;
use serde_json::Value;

use crate::error::CoreResult;
use crate::types::DirectApiProbe;

/// Diagnostics service
pub struct DiagnosticsService {
    workflow_logs: Arc<dyn CommandSink>,
}

impl DiagnosticsService {
    #[must_use]
    pub fn new(workflow_logs: Arc<dyn CommandSink>) -> Self {
        Self { workflow_logs }
    }

    /// Ask the backend to read a few runs straight from the CRM API.
    pub async fn test_direct_api(&self) -> CoreResult<DirectApiProbe> {
        let body = self
            .workflow_logs
            .get(&[("source", "api"), ("showAll", "true"), ("limit", "5")])
            .await?;

        let logs = body.get("logs").and_then(Value::as_array);
        let count = body
            .get("count")
            .and_then(Value::as_u64)
            .unwrap_or_else(|| logs.map_or(0, |l| l.len() as u64));
        let first_name = logs
            .and_then(|l| l.first())
            .and_then(|first| first.get("name"))
            .and_then(integration_hub_provider::scalar_to_string);

        log::info!("Direct API probe: {count} runs");
        Ok(DirectApiProbe { count, first_name })
    }

    /// Raw table information from the backend database, for display.
    pub async fn check_db_tables(&self) -> CoreResult<Value> {
        let body = self
            .workflow_logs
            .get(&[("source", "db"), ("debug", "1")])
            .await?;
        log::debug!("DB tables: {body}");
        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCommandSink, SentCommand};
    use serde_json::json;

    fn service() -> (DiagnosticsService, Arc<MockCommandSink>) {
        let sink = MockCommandSink::new();
        (DiagnosticsService::new(sink.clone()), sink)
    }

    #[tokio::test]
    async fn direct_api_probe_reports_first_run() {
        let (svc, sink) = service();
        sink.push_reply(Ok(json!({
            "count": 12,
            "logs": [{"id": "1", "name": "Approve invoice"}, {"id": "2", "name": "Notify"}]
        })))
        .await;

        let probe = svc.test_direct_api().await.unwrap();
        assert_eq!(probe.count, 12);
        assert_eq!(probe.first_name.as_deref(), Some("Approve invoice"));

        let SentCommand::Get(params) = &sink.sent().await[0] else {
            panic!("expected a GET");
        };
        assert!(params.contains(&("source".to_string(), "api".to_string())));
        assert!(params.contains(&("limit".to_string(), "5".to_string())));
    }

    #[tokio::test]
    async fn direct_api_probe_without_runs() {
        let (svc, sink) = service();
        sink.push_reply(Ok(json!({"logs": []}))).await;

        let probe = svc.test_direct_api().await.unwrap();
        assert_eq!(probe.count, 0);
        assert_eq!(probe.first_name, None);
    }

    #[tokio::test]
    async fn db_tables_are_returned_raw() {
        let (svc, sink) = service();
        let tables = json!({"tables": ["workflow_logs", "deal_changes"]});
        sink.push_reply(Ok(tables.clone())).await;
        assert_eq!(svc.check_db_tables().await.unwrap(), tables);
    }
}
