//! 核心服务
//!
//! 封装 integration-hub-core 的 ServiceContext，供 update 层调用。
//!
//! update 层是同步的：每个命令在这里被 `tokio::spawn` 到运行时上，
//! 完成后把结果作为 [`BackgroundMessage`] 发回主循环，失败则直接发通知。

use std::future::Future;
use std::sync::Arc;

use integration_hub_core::types::{
    ConnectionForm, ConnectionStatus, Notification, Record, ScreenKind,
};
use integration_hub_core::{
    CoreError, CoreResult, HubConfig, Notifier, PollingListController, ServiceContext, TokenStore,
};
use integration_hub_core::traits::ChannelNotifier;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::i18n::t;
use crate::message::BackgroundMessage;

/// 主循环需要排空的两个通道
pub struct Inbox {
    pub notifications: UnboundedReceiver<Notification>,
    pub background: UnboundedReceiver<BackgroundMessage>,
}

/// 任务完成后的回报端
#[derive(Clone)]
struct Reporter {
    notifier: Arc<dyn Notifier>,
    outbox: UnboundedSender<BackgroundMessage>,
}

impl Reporter {
    fn send(&self, message: BackgroundMessage) {
        if self.outbox.send(message).is_err() {
            log::debug!("Background result dropped: UI closed");
        }
    }

    fn success(&self, title: &str, message: impl Into<String>) {
        self.notifier.notify(Notification::success(title, message));
    }

    fn info(&self, title: &str, message: impl Into<String>) {
        self.notifier.notify(Notification::info(title, message));
    }

    fn failure(&self, title: &str, error: &CoreError) {
        if error.is_expected() {
            log::warn!("[{title}] {error}");
        } else {
            log::error!("[{title}] {error}");
        }
        self.notifier
            .notify(Notification::error(title, error.user_message()));
    }
}

/// TUI 核心服务
pub struct CoreService {
    ctx: Arc<ServiceContext>,
    reporter: Reporter,
}

impl CoreService {
    /// 创建核心服务与对应的收件箱
    pub fn new(config: HubConfig, token_store: Arc<dyn TokenStore>) -> CoreResult<(Self, Inbox)> {
        let (notifier, notifications) = ChannelNotifier::channel();
        let notifier: Arc<dyn Notifier> = Arc::new(notifier);
        let (outbox, background) = mpsc::unbounded_channel();

        let ctx = ServiceContext::new(config, token_store, Arc::clone(&notifier))?;
        let service = Self {
            ctx: Arc::new(ctx),
            reporter: Reporter { notifier, outbox },
        };
        Ok((
            service,
            Inbox {
                notifications,
                background,
            },
        ))
    }

    pub fn config(&self) -> &HubConfig {
        self.ctx.config()
    }

    /// 为列表页创建控制器
    pub fn controller(&self, kind: ScreenKind) -> PollingListController {
        self.ctx.controller(kind)
    }

    /// 运行 `task`，成功交给 `done`，失败发通知
    fn spawn<T, Fut, Done>(&self, title: &'static str, task: Fut, done: Done)
    where
        T: Send + 'static,
        Fut: Future<Output = CoreResult<T>> + Send + 'static,
        Done: FnOnce(T, &Reporter) + Send + 'static,
    {
        let reporter = self.reporter.clone();
        tokio::spawn(async move {
            match task.await {
                Ok(value) => done(value, &reporter),
                Err(e) => reporter.failure(title, &e),
            }
        });
    }

    // ========== 会话 ==========

    /// 从令牌存储恢复会话
    pub fn restore_session(&self) {
        let session = self.ctx.session();
        self.spawn(
            "auth",
            async move { session.init().await },
            |authenticated, r| r.send(BackgroundMessage::SessionRestored { authenticated }),
        );
    }

    pub fn login(&self, username: String, password: String) {
        let auth = self.ctx.auth_service();
        let reporter = self.reporter.clone();
        tokio::spawn(async move {
            let result = auth.login(&username, &password).await;
            if let Err(e) = &result {
                log::warn!("[auth] login failed: {e}");
            }
            reporter.send(BackgroundMessage::LoginFinished(
                result.map_err(|e| e.user_message()),
            ));
        });
    }

    pub fn logout(&self) {
        let auth = self.ctx.auth_service();
        self.spawn(
            "auth",
            async move { auth.logout().await },
            |(), r| {
                r.info("auth", t().notify.logged_out);
                r.send(BackgroundMessage::LoggedOut);
            },
        );
    }

    // ========== ERP 文档 ==========

    pub fn sync_documents(&self, limit: u32) {
        let svc = self.ctx.document_service();
        self.spawn(
            "documents",
            async move { svc.sync_documents(limit).await },
            |count, r| {
                r.success("documents", format!("{} {count}", t().notify.documents_synced));
                r.send(BackgroundMessage::Reload(ScreenKind::Documents));
            },
        );
    }

    pub fn clear_documents(&self) {
        let svc = self.ctx.document_service();
        self.spawn(
            "documents",
            async move { svc.clear_documents().await },
            |count, r| {
                r.success("documents", format!("{} {count}", t().notify.documents_cleared));
                r.send(BackgroundMessage::Reload(ScreenKind::Documents));
            },
        );
    }

    pub fn create_deal(&self, document_id: String) {
        let svc = self.ctx.document_service();
        self.spawn(
            "documents",
            async move { svc.create_deal(&document_id).await },
            |deal_id, r| {
                r.success("documents", format!("{} {deal_id}", t().notify.deal_created));
                r.send(BackgroundMessage::Reload(ScreenKind::Documents));
            },
        );
    }

    pub fn check_deal(&self, deal_id: String) {
        let svc = self.ctx.document_service();
        let shown = deal_id.clone();
        self.spawn(
            "documents",
            async move { svc.check_deal(&deal_id).await },
            move |exists, r| {
                if exists {
                    r.success("documents", format!("{} {shown}", t().notify.deal_exists));
                } else {
                    r.info("documents", format!("{} {shown}", t().notify.deal_missing));
                }
            },
        );
    }

    pub fn sync_with_crm(&self) {
        let svc = self.ctx.document_service();
        self.spawn(
            "documents",
            async move { svc.sync_with_crm().await },
            |message, r| {
                let text = if message.is_empty() {
                    t().notify.crm_synced.to_string()
                } else {
                    message
                };
                r.success("documents", text);
                r.send(BackgroundMessage::Reload(ScreenKind::Documents));
            },
        );
    }

    pub fn enrich_document(&self, id: String) {
        let svc = self.ctx.document_service();
        let shown = id.clone();
        self.spawn(
            "documents",
            async move { svc.enrich_document(&id).await },
            move |(), r| {
                r.success("documents", format!("{} {shown}", t().notify.document_enriched));
                r.send(BackgroundMessage::Reload(ScreenKind::Documents));
            },
        );
    }

    /// 逐个补全客户信息缺失的文档
    pub fn enrich_all(&self, documents: Vec<Record>) {
        let svc = self.ctx.document_service();
        self.spawn(
            "documents",
            async move { Ok(svc.enrich_all(&documents).await) },
            |summary, r| {
                if summary.total() == 0 {
                    r.info("documents", t().notify.enrich_nothing);
                    return;
                }
                r.success(
                    "documents",
                    format!(
                        "{} {} / {}",
                        t().notify.enrich_all_done,
                        summary.success_count,
                        summary.error_count
                    ),
                );
                r.send(BackgroundMessage::Reload(ScreenKind::Documents));
            },
        );
    }

    // ========== 交易 ==========

    pub fn rollback(&self, deal_id: String, target_stage_id: String) {
        let svc = self.ctx.deal_service();
        self.spawn(
            "deal-changes",
            async move { svc.rollback(&deal_id, &target_stage_id).await },
            |message, r| {
                let text = if message.is_empty() {
                    t().notify.rollback_done.to_string()
                } else {
                    message
                };
                r.success("deal-changes", text);
                r.send(BackgroundMessage::Reload(ScreenKind::DealChanges));
            },
        );
    }

    pub fn enrich_users(&self) {
        let svc = self.ctx.deal_service();
        self.spawn(
            "deal-changes",
            async move { svc.enrich_users().await },
            |result, r| {
                r.success(
                    "deal-changes",
                    format!("{} {}", t().notify.users_enriched, result.users_processed),
                );
                r.send(BackgroundMessage::Reload(ScreenKind::DealChanges));
            },
        );
    }

    pub fn deal_history(&self, deal_id: String) {
        let svc = self.ctx.deal_service();
        let shown = deal_id.clone();
        self.spawn(
            "deal-changes",
            async move { svc.history(&deal_id).await },
            move |records, r| {
                r.send(BackgroundMessage::DealHistory {
                    deal_id: shown,
                    records,
                });
            },
        );
    }

    // ========== ERP 连接 ==========

    pub fn load_connection(&self) {
        let svc = self.ctx.connection_service();
        self.spawn(
            "connection",
            async move { svc.get_connection().await },
            |connection, r| r.send(BackgroundMessage::ConnectionLoaded(connection)),
        );
    }

    pub fn test_connection(&self) {
        let svc = self.ctx.connection_service();
        let reporter = self.reporter.clone();
        tokio::spawn(async move {
            let status = svc.test_connection().await;
            match status {
                ConnectionStatus::Online => {
                    reporter.success("connection", t().notify.connection_online);
                }
                ConnectionStatus::Offline => {
                    reporter.info("connection", t().notify.connection_offline);
                }
            }
            reporter.send(BackgroundMessage::ConnectionTested(status));
        });
    }

    pub fn save_connection(&self, form: ConnectionForm) {
        let svc = self.ctx.connection_service();
        self.spawn(
            "connection",
            async move {
                svc.save_connection(&form).await?;
                svc.get_connection().await
            },
            |connection, r| {
                r.success("connection", t().notify.connection_saved);
                r.send(BackgroundMessage::ConnectionSaved);
                r.send(BackgroundMessage::ConnectionLoaded(connection));
            },
        );
    }

    // ========== 诊断 ==========

    pub fn test_direct_api(&self) {
        let svc = self.ctx.diagnostics_service();
        self.spawn(
            "diagnostics",
            async move { svc.test_direct_api().await },
            |probe, r| {
                let text = match probe.first_name {
                    Some(name) => format!("{} {} ({name})", t().notify.direct_api, probe.count),
                    None => format!("{} {}", t().notify.direct_api, probe.count),
                };
                r.success("diagnostics", text.clone());
                r.send(BackgroundMessage::Diagnostics(text));
            },
        );
    }

    pub fn check_db_tables(&self) {
        let svc = self.ctx.diagnostics_service();
        self.spawn(
            "diagnostics",
            async move { svc.check_db_tables().await },
            |body, r| {
                let text = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
                r.send(BackgroundMessage::Diagnostics(text));
            },
        );
    }
}
