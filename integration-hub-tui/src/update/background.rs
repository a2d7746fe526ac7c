//! 后台任务结果回写

use integration_hub_core::types::NotificationLevel;

use crate::i18n::t;
use crate::message::BackgroundMessage;
use crate::model::{App, Modal};

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackgroundMessage) {
    match msg {
        BackgroundMessage::SessionRestored { authenticated } => {
            if authenticated {
                app.authenticated = true;
            } else {
                app.require_login();
            }
        }

        BackgroundMessage::LoginFinished(Ok(())) => {
            app.authenticated = true;
            if app.modal.is_login() {
                app.modal.close();
            }
            app.set_status(NotificationLevel::Success, t().notify.login_ok);
        }
        BackgroundMessage::LoginFinished(Err(message)) => {
            if let Some(Modal::Login { pending, error, .. }) = app.modal.active.as_mut() {
                *pending = false;
                *error = Some(message);
            }
        }

        BackgroundMessage::LoggedOut => app.require_login(),

        BackgroundMessage::Reload(kind) => {
            // 从未打开过的列表不必刷新，进入时会首次加载
            if let Some(screen) = app.screen_mut(kind)
                && screen.loaded
            {
                screen.controller.spawn_reload();
            }
        }

        BackgroundMessage::DealHistory { deal_id, records } => {
            // 用户可能已经关掉或换了 ID
            if let Some(Modal::DealHistory {
                deal_id: shown,
                records: slot,
                scroll,
            }) = app.modal.active.as_mut()
                && shown.trim() == deal_id
            {
                *slot = Some(records);
                *scroll = 0;
            }
        }

        BackgroundMessage::ConnectionLoaded(connection) => {
            app.connection.set_connection(connection);
        }
        BackgroundMessage::ConnectionTested(status) => {
            app.connection.status = Some(status);
        }
        BackgroundMessage::ConnectionSaved => {
            // 新连接尚未测试
            app.connection.status = None;
        }

        BackgroundMessage::Diagnostics(text) => {
            app.home.diagnostics = Some(text.clone());
            if !app.modal.is_open() {
                app.modal.show(Modal::Diagnostics { text, scroll: 0 });
            }
        }
    }
}
