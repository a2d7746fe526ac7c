//! ERP connection types

use serde::{Deserialize, Serialize};

/// Stored ERP connection (the password never comes back).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default, deserialize_with = "crate::types::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub url: String,
    pub username: String,
}

/// Connection edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionForm {
    pub url: String,
    pub username: String,
    pub password: String,
}

/// Result of a connection probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Online,
    Offline,
}
