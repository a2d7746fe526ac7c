//! Controller scenarios over a mock HTTP backend.
//!
//! ```bash
//! cargo test -p integration-hub-core --test controller_http_test
//! ```

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use integration_hub_core::traits::{ChannelNotifier, InMemoryTokenStore};
use integration_hub_core::types::{NotificationLevel, QueryFilter, ScreenKind};
use integration_hub_core::{EndpointsConfig, HubConfig, ServiceContext};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (
    MockServer,
    ServiceContext,
    UnboundedReceiver<integration_hub_core::types::Notification>,
) {
    let server = MockServer::start().await;
    let base = server.uri();
    let config = HubConfig {
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
        endpoints: EndpointsConfig {
            workflow_logs: format!("{base}/workflow-logs"),
            erp_integration: format!("{base}/erp"),
            ..EndpointsConfig::default()
        },
        ..HubConfig::default()
    };
    let (notifier, rx) = ChannelNotifier::channel();
    let ctx = ServiceContext::new(
        config,
        Arc::new(InMemoryTokenStore::new()),
        Arc::new(notifier),
    )
    .unwrap();
    (server, ctx, rx)
}

#[tokio::test]
async fn list_then_expand_and_collapse() {
    let (server, ctx, mut notifications) = setup().await;
    Mock::given(method("GET"))
        .and(path("/workflow-logs"))
        .and(query_param("showAll", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"logs": [{"id": "42", "status": "running"}]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/workflow-logs"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42", "foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let controller = ctx.controller(ScreenKind::WorkflowRuns);
    controller.refresh(QueryFilter::default()).await;

    let state = controller.snapshot();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.records[0].id, "42");
    assert_eq!(state.records[0].status.as_deref(), Some("running"));

    controller.toggle_selection("42").await;
    let state = controller.snapshot();
    assert_eq!(state.selected_id.as_deref(), Some("42"));
    assert_eq!(state.detail.as_ref().unwrap().get("foo"), Some(&json!("bar")));
    assert!(!state.detail_loading);

    controller.toggle_selection("42").await;
    let state = controller.snapshot();
    assert_eq!(state.selected_id, None);
    assert_eq!(state.detail, None);

    assert!(notifications.try_recv().is_err());
}

#[tokio::test]
async fn server_error_keeps_previous_records() {
    let (server, ctx, mut notifications) = setup().await;
    Mock::given(method("GET"))
        .and(path("/workflow-logs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"logs": [{"id": "1", "status": "completed"}]})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/workflow-logs"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Database unavailable"})),
        )
        .mount(&server)
        .await;

    let controller = ctx.controller(ScreenKind::WorkflowRuns);
    controller.reload().await;
    assert_eq!(controller.snapshot().records.len(), 1);

    controller.reload().await;
    let state = controller.snapshot();
    assert_eq!(state.error.as_deref(), Some("Database unavailable"));
    assert!(!state.loading);
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.records[0].id, "1");

    let notification = notifications.try_recv().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.title, "workflow-runs");
    assert_eq!(notification.message, "Database unavailable");
}

#[tokio::test]
async fn documents_detail_is_unwrapped() {
    let (server, ctx, _notifications) = setup().await;
    Mock::given(method("GET"))
        .and(path("/erp"))
        .and(query_param("action", "list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "documents": [{"id": 7, "document_number": "ZK-7"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/erp"))
        .and(query_param("action", "get_document"))
        .and(query_param("id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "document": {"id": 7, "document_json": {"lines": 3}}
        })))
        .mount(&server)
        .await;

    let controller = ctx.controller(ScreenKind::Documents);
    controller.reload().await;
    assert_eq!(controller.snapshot().records[0].id, "7");

    controller.toggle_selection("7").await;
    let detail = controller.snapshot().detail.unwrap();
    assert_eq!(detail.get("document_json.lines"), Some(&json!(3)));
}
