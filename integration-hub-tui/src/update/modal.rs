//! 弹窗更新逻辑
//!
//! 表单弹窗在 Confirm 时把输入交给 `CoreService`，结果异步回到 background。

use integration_hub_core::types::SYNC_LIMITS;

use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(modal) = app.modal.active.as_mut() else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            if !modal.is_login() {
                app.modal.close();
            }
        }
        ModalMessage::NextField => modal.next_field(),
        ModalMessage::PrevField => modal.prev_field(),
        ModalMessage::PrevOption => modal.shift_option(false),
        ModalMessage::NextOption => modal.shift_option(true),
        ModalMessage::ScrollUp => modal.scroll(false),
        ModalMessage::ScrollDown => modal.scroll(true),

        ModalMessage::Input(c) => {
            if let Some(input) = modal.focused_input_mut() {
                input.push(c);
            }
            if let Modal::Login { error, .. } = modal {
                *error = None;
            }
        }
        ModalMessage::Backspace => {
            if let Some(input) = modal.focused_input_mut() {
                input.pop();
            }
        }

        ModalMessage::Confirm => confirm(app),
    }
}

/// 提交当前弹窗
fn confirm(app: &mut App) {
    let Some(modal) = app.modal.active.as_mut() else {
        return;
    };

    if let Some(form) = modal.connection_form() {
        app.modal.close();
        app.core.save_connection(form);
        return;
    }

    match modal {
        Modal::Login {
            username,
            password,
            pending,
            error,
            ..
        } => {
            if *pending {
                return;
            }
            *pending = true;
            *error = None;
            app.core.login(username.trim().to_string(), password.clone());
        }

        Modal::SyncDocuments { limit_index } => {
            let limit = SYNC_LIMITS[(*limit_index).min(SYNC_LIMITS.len() - 1)];
            app.modal.close();
            app.core.sync_documents(limit);
        }

        Modal::ConfirmClear => {
            app.modal.close();
            app.core.clear_documents();
        }

        Modal::CheckDeal { deal_id } => {
            let deal_id = deal_id.trim().to_string();
            if deal_id.is_empty() {
                return;
            }
            app.modal.close();
            app.core.check_deal(deal_id);
        }

        Modal::Rollback {
            deal_id,
            target_stage_id,
            focus,
        } => {
            let deal_id = deal_id.trim().to_string();
            let target = target_stage_id.trim().to_string();
            // 第一个字段填完后先跳到第二个
            if target.is_empty() {
                *focus = 1;
                return;
            }
            if deal_id.is_empty() {
                *focus = 0;
                return;
            }
            app.modal.close();
            app.core.rollback(deal_id, target);
        }

        Modal::DealHistory {
            deal_id, records, ..
        } => {
            if records.is_some() {
                app.modal.close();
                return;
            }
            let deal_id = deal_id.trim().to_string();
            if !deal_id.is_empty() {
                app.core.deal_history(deal_id);
            }
        }

        Modal::EditConnection { .. } => {}

        Modal::Diagnostics { .. } | Modal::Help { .. } => app.modal.close(),
    }
}
