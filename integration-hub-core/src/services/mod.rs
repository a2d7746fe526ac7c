//! 业务逻辑服务层

mod auth_service;
mod connection_service;
mod deal_service;
mod diagnostics_service;
mod document_service;
pub mod screens;

pub use auth_service::{AuthService, INVALID_CREDENTIALS_MESSAGE, Session};
pub use connection_service::ConnectionService;
pub use deal_service::DealService;
pub use diagnostics_service::DiagnosticsService;
pub use document_service::DocumentService;

use std::sync::Arc;

use integration_hub_provider::{
    CommandSink, DetailSource, HttpCommandSink, HttpDetailSource, HttpListSource, ListSource,
    create_http_client,
};
use reqwest::Client;

use crate::config::HubConfig;
use crate::controller::{ControllerOptions, PollingListController};
use crate::error::CoreResult;
use crate::traits::{Notifier, TokenStore};
use crate::types::ScreenKind;

/// 服务上下文 - 持有所有依赖
///
/// The platform layer builds one from its configuration, its token store and
/// its notification sink, then asks it for controllers and services.
pub struct ServiceContext {
    config: HubConfig,
    client: Client,
    notifier: Arc<dyn Notifier>,
    session: Arc<Session>,
}

impl ServiceContext {
    /// Validate `config` and create the shared HTTP client.
    pub fn new(
        config: HubConfig,
        token_store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> CoreResult<Self> {
        config.validate()?;
        let client = create_http_client(&config.client_options())?;
        Ok(Self {
            config,
            client,
            notifier,
            session: Arc::new(Session::new(token_store)),
        })
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.notifier)
    }

    pub fn session(&self) -> Arc<Session> {
        Arc::clone(&self.session)
    }

    // ===== 列表 =====

    pub fn list_source(&self, kind: ScreenKind) -> Arc<dyn ListSource> {
        let endpoint = screens::list_endpoint(kind, &self.config.endpoints);
        Arc::new(HttpListSource::new(self.client.clone(), endpoint))
    }

    pub fn detail_source(&self, kind: ScreenKind) -> Option<Arc<dyn DetailSource>> {
        screens::detail_endpoint(kind, &self.config.endpoints).map(|endpoint| {
            Arc::new(HttpDetailSource::new(self.client.clone(), endpoint)) as Arc<dyn DetailSource>
        })
    }

    /// A fresh controller for `kind`, idle until its first refresh.
    pub fn controller(&self, kind: ScreenKind) -> PollingListController {
        let options = ControllerOptions::new(kind.name())
            .with_interval(self.config.refresh_interval());
        PollingListController::new(
            options,
            self.list_source(kind),
            self.detail_source(kind),
            self.notifier(),
        )
    }

    // ===== 命令服务 =====

    fn sink(&self, name: &str, url: &str) -> Arc<dyn CommandSink> {
        Arc::new(HttpCommandSink::new(self.client.clone(), name, url))
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(
            self.sink("auth", &self.config.endpoints.auth),
            self.session(),
        )
    }

    pub fn deal_service(&self) -> DealService {
        let endpoints = &self.config.endpoints;
        DealService::new(
            self.sink("deal-rollback", &endpoints.deal_rollback),
            self.sink("deal-enrich", &endpoints.deal_enrich),
            self.sink("deal-history", &endpoints.deal_history),
        )
    }

    pub fn document_service(&self) -> DocumentService {
        DocumentService::new(self.sink("erp", &self.config.endpoints.erp_integration))
    }

    pub fn connection_service(&self) -> ConnectionService {
        ConnectionService::new(self.sink("erp", &self.config.endpoints.erp_integration))
    }

    pub fn diagnostics_service(&self) -> DiagnosticsService {
        DiagnosticsService::new(self.sink("workflow-logs", &self.config.endpoints.workflow_logs))
    }
}
