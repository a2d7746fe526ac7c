//! Endpoint table of the list screens

use integration_hub_provider::{DetailEndpoint, FilterForwarding, ListEndpoint, RecordShape};

use crate::config::EndpointsConfig;
use crate::types::ScreenKind;

const RUNS_PAGE: &str = "100";
const LOGS_PAGE: &str = "50";

/// Collection endpoint backing `kind`.
pub fn list_endpoint(kind: ScreenKind, endpoints: &EndpointsConfig) -> ListEndpoint {
    let name = kind.name();
    match kind {
        // Always read from the backend database, status and search from the filter
        ScreenKind::WorkflowRuns => ListEndpoint::new(name, &endpoints.workflow_logs, "logs")
            .with_param("source", "db")
            .with_param("showAll", "true")
            .with_param("limit", RUNS_PAGE)
            .with_param("offset", "0")
            .with_forwarding(FilterForwarding {
                source: false,
                ..FilterForwarding::ALL
            }),
        ScreenKind::RunningRuns => ListEndpoint::new(name, &endpoints.workflow_logs, "logs")
            .with_param("status", "running")
            .with_param("limit", RUNS_PAGE)
            .with_param("offset", "0")
            .with_forwarding(FilterForwarding {
                status: false,
                ..FilterForwarding::ALL
            }),
        ScreenKind::Timeline => ListEndpoint::new(name, &endpoints.timeline, "logs")
            .with_shape(RecordShape::new("ID"))
            .with_param("limit", LOGS_PAGE)
            .with_forwarding(FilterForwarding::NONE),
        ScreenKind::DealChanges => ListEndpoint::new(name, &endpoints.deal_changes, "changes")
            .with_shape(RecordShape::new("id"))
            .with_param("limit", LOGS_PAGE)
            .with_forwarding(FilterForwarding {
                search: true,
                ..FilterForwarding::NONE
            }),
        // Searched locally, see `ScreenKind::local_search_fields`
        ScreenKind::Documents => ListEndpoint::new(name, &endpoints.erp_integration, "documents")
            .with_shape(RecordShape::new("id"))
            .with_param("action", "list")
            .with_forwarding(FilterForwarding::NONE),
    }
}

/// Detail endpoint of `kind`, `None` when its rows do not expand.
pub fn detail_endpoint(kind: ScreenKind, endpoints: &EndpointsConfig) -> Option<DetailEndpoint> {
    if !kind.capabilities().has_detail_expansion {
        return None;
    }
    let name = format!("{}-detail", kind.name());
    match kind {
        ScreenKind::WorkflowRuns | ScreenKind::RunningRuns => {
            Some(DetailEndpoint::new(name, &endpoints.workflow_logs))
        }
        ScreenKind::Documents => Some(
            DetailEndpoint::new(name, &endpoints.erp_integration)
                .with_action("get_document")
                .unwrapping("document"),
        ),
        ScreenKind::Timeline | ScreenKind::DealChanges => None,
    }
}
