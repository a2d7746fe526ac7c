//! ERP connection management

use std::sync::Arc;

use integration_hub_provider::{CommandRequest, CommandSink};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::{Connection, ConnectionForm, ConnectionStatus};

/// ERP connection service
pub struct ConnectionService {
    sink: Arc<dyn CommandSink>,
}

impl ConnectionService {
    #[must_use]
    pub fn new(sink: Arc<dyn CommandSink>) -> Self {
        Self { sink }
    }

    /// The active connection, `None` when none is configured.
    pub async fn get_connection(&self) -> CoreResult<Option<Connection>> {
        let body = self.sink.get(&[("action", "get_connection")]).await?;
        match body.get("connection") {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| CoreError::SerializationError(e.to_string())),
        }
    }

    /// Probe the active connection. Any failure reads as offline.
    pub async fn test_connection(&self) -> ConnectionStatus {
        match self.sink.get(&[("action", "test_connection")]).await {
            Ok(body) => {
                let online = body
                    .pointer("/connection_status/success")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                if online {
                    ConnectionStatus::Online
                } else {
                    log::warn!(
                        "ERP connection offline: {}",
                        body.pointer("/connection_status/error")
                            .and_then(Value::as_str)
                            .unwrap_or("no details")
                    );
                    ConnectionStatus::Offline
                }
            }
            Err(e) => {
                log::warn!("ERP connection test failed: {e}");
                ConnectionStatus::Offline
            }
        }
    }

    /// Verify and store new credentials. The server tests them before saving.
    pub async fn save_connection(&self, form: &ConnectionForm) -> CoreResult<()> {
        let url = form.url.trim();
        let username = form.username.trim();
        if url.is_empty() || username.is_empty() || form.password.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "url, username and password are required".to_string(),
            ));
        }

        let request = CommandRequest::action("save_connection")
            .param("url", url)
            .param("username", username)
            .param("password", form.password.as_str());
        self.sink.post(request).await?;
        log::info!("ERP connection saved for {username}@{url}");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCommandSink, SentCommand, remote_failure};
    use serde_json::json;

    fn service() -> (ConnectionService, Arc<MockCommandSink>) {
        let sink = MockCommandSink::new();
        (ConnectionService::new(sink.clone()), sink)
    }

    #[tokio::test]
    async fn get_connection_parses_numeric_id() {
        let (svc, sink) = service();
        sink.push_reply(Ok(json!({
            "success": true,
            "connection": {"id": 2, "name": "ERP", "url": "https://erp.local", "username": "sync"}
        })))
        .await;

        let conn = svc.get_connection().await.unwrap().unwrap();
        assert_eq!(conn.id, "2");
        assert_eq!(conn.username, "sync");
        assert_eq!(
            sink.sent().await,
            vec![SentCommand::Get(vec![(
                "action".to_string(),
                "get_connection".to_string()
            )])]
        );
    }

    #[tokio::test]
    async fn missing_connection_is_none() {
        let (svc, sink) = service();
        sink.push_reply(Ok(json!({"success": true, "connection": null})))
            .await;
        assert_eq!(svc.get_connection().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_connection_follows_nested_flag() {
        let (svc, sink) = service();
        sink.push_reply(Ok(json!({"success": true, "connection_status": {"success": true}})))
            .await;
        sink.push_reply(Ok(
            json!({"success": true, "connection_status": {"success": false, "error": "401"}}),
        ))
        .await;
        sink.push_reply(Err(remote_failure("No active connection")))
            .await;

        assert_eq!(svc.test_connection().await, ConnectionStatus::Online);
        assert_eq!(svc.test_connection().await, ConnectionStatus::Offline);
        assert_eq!(svc.test_connection().await, ConnectionStatus::Offline);
    }

    #[tokio::test]
    async fn save_requires_every_field() {
        let (svc, sink) = service();
        let form = ConnectionForm {
            url: "https://erp.local".into(),
            username: "sync".into(),
            password: String::new(),
        };
        assert!(matches!(
            svc.save_connection(&form).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(sink.sent().await.is_empty());
    }

    #[tokio::test]
    async fn save_posts_trimmed_form() {
        let (svc, sink) = service();
        let form = ConnectionForm {
            url: " https://erp.local ".into(),
            username: "sync".into(),
            password: "pw".into(),
        };
        svc.save_connection(&form).await.unwrap();
        assert_eq!(
            sink.sent().await,
            vec![SentCommand::Post(json!({
                "action": "save_connection",
                "url": "https://erp.local",
                "username": "sync",
                "password": "pw"
            }))]
        );
    }
}
