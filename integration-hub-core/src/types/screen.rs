//! List screens and what each of them can do

use serde::{Deserialize, Serialize};

/// Feature switches of one list view.
///
/// A single list view renders every screen; these flags decide which
/// controls it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewCapabilities {
    /// Rows can be expanded to show a lazily fetched detail payload.
    pub has_detail_expansion: bool,
    /// Search text / status / source controls are shown.
    pub has_filters: bool,
    /// The auto-refresh toggle is shown.
    pub has_auto_refresh: bool,
}

/// Every list screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    /// All workflow runs, read from the backend database.
    WorkflowRuns,
    /// Workflow runs currently in `running` state.
    RunningRuns,
    /// CRM timeline entries.
    Timeline,
    /// Deal stage changes.
    DealChanges,
    /// ERP order documents.
    Documents,
}

impl ScreenKind {
    pub const ALL: [Self; 5] = [
        Self::WorkflowRuns,
        Self::RunningRuns,
        Self::Timeline,
        Self::DealChanges,
        Self::Documents,
    ];

    /// Stable name used in logs, errors and notification titles.
    pub fn name(self) -> &'static str {
        match self {
            Self::WorkflowRuns => "workflow-runs",
            Self::RunningRuns => "running-runs",
            Self::Timeline => "timeline",
            Self::DealChanges => "deal-changes",
            Self::Documents => "documents",
        }
    }

    pub fn capabilities(self) -> ViewCapabilities {
        match self {
            Self::WorkflowRuns | Self::RunningRuns => ViewCapabilities {
                has_detail_expansion: true,
                has_filters: true,
                has_auto_refresh: true,
            },
            Self::Timeline => ViewCapabilities {
                has_detail_expansion: false,
                has_filters: false,
                has_auto_refresh: true,
            },
            Self::DealChanges => ViewCapabilities {
                has_detail_expansion: false,
                has_filters: true,
                has_auto_refresh: true,
            },
            Self::Documents => ViewCapabilities {
                has_detail_expansion: true,
                has_filters: true,
                has_auto_refresh: false,
            },
        }
    }

    /// Fields matched by the local search box. Empty when the server filters.
    pub fn local_search_fields(self) -> &'static [&'static str] {
        match self {
            Self::Documents => &[
                "document_number",
                "customer_name",
                "order_status",
                "order_type",
                "author",
            ],
            _ => &[],
        }
    }

    /// Field shown as the row title.
    pub fn title_field(self) -> &'static str {
        match self {
            Self::WorkflowRuns | Self::RunningRuns => "name",
            Self::Timeline => "SETTINGS.TITLE",
            Self::DealChanges => "deal_data.TITLE",
            Self::Documents => "document_number",
        }
    }
}
