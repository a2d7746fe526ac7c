//! CRM deal command results

use serde::{Deserialize, Serialize};

/// Response of the user-enrichment endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichUsersResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub users_processed: u64,
}

/// Result of the direct CRM API probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectApiProbe {
    pub count: u64,
    /// Name of the first returned run, if any.
    pub first_name: Option<String>,
}
