//! Dashboard configuration
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working local setup. Loading the file from disk is left to the platform
//! layer; this module only parses and validates.

use std::time::Duration;

use integration_hub_provider::ClientOptions;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};

const DEFAULT_BASE: &str = "http://127.0.0.1:8000";

/// Languages the view layer ships translations for.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en-US", "ru-RU"];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub language: String,
    pub endpoints: EndpointsConfig,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 10,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            language: "en-US".to_string(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

/// Backend endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub workflow_logs: String,
    pub timeline: String,
    pub deal_changes: String,
    pub deal_enrich: String,
    pub deal_rollback: String,
    pub deal_history: String,
    pub erp_integration: String,
    pub auth: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        let at = |path: &str| format!("{DEFAULT_BASE}/{path}");
        Self {
            workflow_logs: at("workflow-logs"),
            timeline: at("timeline-logs"),
            deal_changes: at("deal-changes"),
            deal_enrich: at("deal-enrich"),
            deal_rollback: at("deal-rollback"),
            deal_history: at("deal-history"),
            erp_integration: at("erp-integration"),
            auth: at("auth"),
        }
    }
}

impl EndpointsConfig {
    /// `(name, url)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("workflow_logs", &self.workflow_logs),
            ("timeline", &self.timeline),
            ("deal_changes", &self.deal_changes),
            ("deal_enrich", &self.deal_enrich),
            ("deal_rollback", &self.deal_rollback),
            ("deal_history", &self.deal_history),
            ("erp_integration", &self.erp_integration),
            ("auth", &self.auth),
        ]
    }
}

impl HubConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML (used to write a starter file).
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("refresh_interval_secs", self.refresh_interval_secs),
            ("request_timeout_secs", self.request_timeout_secs),
            ("connect_timeout_secs", self.connect_timeout_secs),
        ] {
            if value == 0 {
                return Err(CoreError::ConfigError(format!("{name} must be greater than 0")));
            }
        }

        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "unsupported language '{}', expected one of: {}",
                self.language,
                SUPPORTED_LANGUAGES.join(", ")
            )));
        }

        for (name, value) in self.endpoints.entries() {
            let url = Url::parse(value)
                .map_err(|e| CoreError::ConfigError(format!("endpoints.{name}: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(CoreError::ConfigError(format!(
                    "endpoints.{name}: unsupported scheme '{}'",
                    url.scheme()
                )));
            }
        }

        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = HubConfig::from_toml_str("").unwrap();
        assert_eq!(config, HubConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(10));
        assert_eq!(config.client_options().request_timeout, Duration::from_secs(30));
        assert_eq!(
            config.endpoints.timeline,
            "http://127.0.0.1:8000/timeline-logs"
        );
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = HubConfig::from_toml_str(
            r#"
            refresh_interval_secs = 5
            language = "ru-RU"

            [endpoints]
            auth = "https://crm.example.com/auth"
            "#,
        )
        .unwrap();
        assert_eq!(config.refresh_interval_secs, 5);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.language, "ru-RU");
        assert_eq!(config.endpoints.auth, "https://crm.example.com/auth");
        assert_eq!(
            config.endpoints.deal_changes,
            EndpointsConfig::default().deal_changes
        );
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = HubConfig::from_toml_str("refresh_interval_secs = ").unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = HubConfig::from_toml_str("connect_timeout_secs = 0").unwrap_err();
        assert!(err.to_string().contains("connect_timeout_secs"));
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let err = HubConfig::from_toml_str("[endpoints]\ntimeline = \"ftp://host/x\"").unwrap_err();
        assert!(err.to_string().contains("endpoints.timeline"));

        let err = HubConfig::from_toml_str("[endpoints]\nauth = \"not a url\"").unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(HubConfig::from_toml_str("language = \"de-DE\"").is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = HubConfig::default().to_toml_string().unwrap();
        assert_eq!(HubConfig::from_toml_str(&text).unwrap(), HubConfig::default());
    }
}
