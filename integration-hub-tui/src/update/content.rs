//! 内容面板更新逻辑
//!
//! 列表页的光标、展开、搜索、过滤、自动刷新，以及各页面的专属操作。

use integration_hub_core::services::DocumentService;
use integration_hub_core::types::{NotificationLevel, Record};

use crate::backend::{export_dir, write_export};
use crate::i18n::t;
use crate::message::{ContentMessage, ScreenAction};
use crate::model::{App, ListScreenState, Modal, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::Reload => handle_reload(app),
        ContentMessage::ToggleAutoRefresh => handle_toggle_auto_refresh(app),
        ContentMessage::Action(action) => handle_action(app, action),
        _ => {
            if let Some(screen) = app.current_screen_mut() {
                update_screen(screen, msg);
            }
        }
    }
}

/// 只涉及单个列表页 UI 状态的消息
fn update_screen(screen: &mut ListScreenState, msg: ContentMessage) {
    match msg {
        // ========== 光标 ==========
        ContentMessage::SelectPrevious => screen.select_previous(),
        ContentMessage::SelectNext => screen.select_next(),
        ContentMessage::SelectFirst => screen.select_first(),
        ContentMessage::SelectLast => screen.select_last(),

        ContentMessage::ToggleExpand => {
            if !screen.kind.capabilities().has_detail_expansion {
                return;
            }
            if let Some(record) = screen.cursor_record() {
                screen.controller.spawn_toggle_selection(&record.id);
            }
        }

        // ========== 搜索 ==========
        ContentMessage::StartSearch => {
            if screen.supports_search() {
                screen.search_draft = Some(screen.search_text.clone());
            }
        }
        ContentMessage::SearchInput(c) => {
            if let Some(draft) = screen.search_draft.as_mut() {
                draft.push(c);
            }
        }
        ContentMessage::SearchBackspace => {
            if let Some(draft) = screen.search_draft.as_mut() {
                draft.pop();
            }
        }
        ContentMessage::CancelSearch => {
            screen.search_draft = None;
        }
        ContentMessage::SubmitSearch => {
            let Some(draft) = screen.search_draft.take() else {
                return;
            };
            screen.search_text = draft.trim().to_string();
            screen.cursor = 0;
            if screen.searches_locally() {
                // 本地过滤，控制器只记下条件
                screen.controller.set_filter(screen.query_filter());
            } else {
                refetch(screen);
            }
        }

        // ========== 过滤 ==========
        ContentMessage::CycleStatus => {
            if screen.supports_status() {
                screen.cycle_status();
                refetch(screen);
            }
        }
        ContentMessage::ToggleSource => {
            if screen.supports_source() {
                screen.source_mode = screen.source_mode.toggle();
                refetch(screen);
            }
        }

        ContentMessage::Reload | ContentMessage::ToggleAutoRefresh | ContentMessage::Action(_) => {}
    }
}

/// 过滤条件变化后从第一条开始重新加载
fn refetch(screen: &mut ListScreenState) {
    screen.cursor = 0;
    screen.loaded = true;
    screen.controller.spawn_refresh(screen.query_filter());
}

fn handle_reload(app: &mut App) {
    match app.current_page {
        Page::Home => {}
        Page::List(_) => {
            if let Some(screen) = app.current_screen_mut() {
                screen.loaded = true;
                screen.controller.spawn_reload();
            }
        }
        Page::Connection => {
            app.connection.loading = true;
            app.core.load_connection();
        }
    }
}

fn handle_toggle_auto_refresh(app: &mut App) {
    let Some(screen) = app.current_screen_mut() else {
        return;
    };
    if !screen.kind.capabilities().has_auto_refresh {
        app.set_status(NotificationLevel::Info, t().notify.auto_refresh_unavailable);
        return;
    }

    let enabled = !screen.controller.auto_refresh_enabled();
    screen.controller.set_auto_refresh(enabled);
    let text = if enabled {
        t().notify.auto_refresh_on
    } else {
        t().notify.auto_refresh_off
    };
    app.set_status(NotificationLevel::Info, text);
}

// ========== 页面操作 ==========

fn handle_action(app: &mut App, action: ScreenAction) {
    match action {
        // ERP 文档
        ScreenAction::SyncDocuments => app.modal.show(Modal::SyncDocuments {
            limit_index: Modal::DEFAULT_LIMIT_INDEX,
        }),
        ScreenAction::ClearDocuments => app.modal.show(Modal::ConfirmClear),
        ScreenAction::CheckDeal => app.modal.show(Modal::CheckDeal {
            deal_id: cursor_field(app, "crm_deal_id").unwrap_or_default(),
        }),
        ScreenAction::SyncWithCrm => app.core.sync_with_crm(),
        ScreenAction::CreateDeal => {
            if let Some(record) = selected_or_warn(app) {
                app.core.create_deal(record.id);
            }
        }
        ScreenAction::EnrichDocument => {
            if let Some(record) = selected_or_warn(app) {
                app.core.enrich_document(record.id);
            }
        }
        ScreenAction::EnrichAll => {
            let records = app
                .current_screen()
                .map(|screen| screen.controller.with_state(|state| state.records.clone()))
                .unwrap_or_default();
            app.core.enrich_all(records);
        }
        ScreenAction::Export => {
            if let Some(record) = selected_or_warn(app) {
                export_record(app, &record);
            }
        }

        // 交易变更
        ScreenAction::Rollback => app.modal.show(Modal::Rollback {
            deal_id: cursor_field(app, "deal_id").unwrap_or_default(),
            target_stage_id: String::new(),
            focus: 0,
        }),
        ScreenAction::EnrichUsers => app.core.enrich_users(),
        ScreenAction::DealHistory => app.modal.show(Modal::DealHistory {
            deal_id: cursor_field(app, "deal_id").unwrap_or_default(),
            records: None,
            scroll: 0,
        }),

        // 诊断
        ScreenAction::TestDirectApi => app.core.test_direct_api(),
        ScreenAction::CheckDbTables => app.core.check_db_tables(),

        // ERP 连接
        ScreenAction::TestConnection => app.core.test_connection(),
        ScreenAction::EditConnection => {
            let (url, username) = app
                .connection
                .connection
                .as_ref()
                .map(|c| (c.url.clone(), c.username.clone()))
                .unwrap_or_default();
            app.modal.show(Modal::EditConnection {
                url,
                username,
                password: String::new(),
                focus: 0,
            });
        }
    }
}

/// 光标所在记录的某个字段，用于预填表单
fn cursor_field(app: &App, path: &str) -> Option<String> {
    app.current_screen()?
        .cursor_record()?
        .field_str(path)
        .filter(|value| !value.is_empty())
}

/// 光标所在记录；列表为空时提示先选择
fn selected_or_warn(app: &mut App) -> Option<Record> {
    let record = app.current_screen().and_then(ListScreenState::cursor_record);
    if record.is_none() {
        app.set_status(NotificationLevel::Info, t().notify.no_selection);
    }
    record
}

fn export_record(app: &mut App, record: &Record) {
    let result = DocumentService::export_document(record)
        .map_err(anyhow::Error::from)
        .and_then(|exported| write_export(&export_dir(), &exported));

    match result {
        Ok(path) => app.set_status(
            NotificationLevel::Success,
            format!("{} {}", t().notify.exported, path.display()),
        ),
        Err(e) => {
            log::error!("Export of document {} failed: {e:#}", record.id);
            app.set_status(NotificationLevel::Error, format!("{}: {e}", t().common.error));
        }
    }
}

#[cfg(test)]
mod tests {
    use integration_hub_core::types::ScreenKind;

    use super::*;
    use crate::update::test_support::app;

    fn open(app: &mut App, kind: ScreenKind) {
        app.current_page = Page::List(kind);
    }

    #[tokio::test]
    async fn search_draft_commits_on_submit() {
        let (mut app, _inbox) = app();
        open(&mut app, ScreenKind::Documents);

        update(&mut app, ContentMessage::StartSearch);
        assert!(app.is_editing_search());
        for c in "ZK-1 ".chars() {
            update(&mut app, ContentMessage::SearchInput(c));
        }
        update(&mut app, ContentMessage::SearchBackspace);
        update(&mut app, ContentMessage::SubmitSearch);

        let screen = app.current_screen().unwrap();
        assert!(!screen.is_editing_search());
        assert_eq!(screen.search_text, "ZK-1");
        assert_eq!(screen.controller.filter().search(), Some("ZK-1"));
    }

    #[tokio::test]
    async fn cancel_keeps_previous_search() {
        let (mut app, _inbox) = app();
        open(&mut app, ScreenKind::Documents);
        app.screen_mut(ScreenKind::Documents).unwrap().search_text = "old".into();

        update(&mut app, ContentMessage::StartSearch);
        update(&mut app, ContentMessage::SearchInput('x'));
        update(&mut app, ContentMessage::CancelSearch);

        assert_eq!(app.current_screen().unwrap().search_text, "old");
    }

    #[tokio::test]
    async fn timeline_has_no_search() {
        let (mut app, _inbox) = app();
        open(&mut app, ScreenKind::Timeline);
        update(&mut app, ContentMessage::StartSearch);
        assert!(!app.is_editing_search());
    }

    #[tokio::test]
    async fn status_cycle_refetches_workflow_runs() {
        let (mut app, _inbox) = app();
        open(&mut app, ScreenKind::WorkflowRuns);
        update(&mut app, ContentMessage::CycleStatus);

        let screen = app.current_screen().unwrap();
        assert!(screen.loaded);
        assert_eq!(screen.controller.filter().status(), Some("running"));
    }

    #[tokio::test]
    async fn auto_refresh_toggles_on_and_off() {
        let (mut app, _inbox) = app();
        open(&mut app, ScreenKind::RunningRuns);

        update(&mut app, ContentMessage::ToggleAutoRefresh);
        assert!(app.current_screen().unwrap().controller.auto_refresh_enabled());
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some(t().notify.auto_refresh_on)
        );

        update(&mut app, ContentMessage::ToggleAutoRefresh);
        assert!(!app.current_screen().unwrap().controller.auto_refresh_enabled());
    }

    #[tokio::test]
    async fn auto_refresh_unavailable_without_capability() {
        let (mut app, _inbox) = app();
        for kind in ScreenKind::ALL {
            if kind.capabilities().has_auto_refresh {
                continue;
            }
            open(&mut app, kind);
            update(&mut app, ContentMessage::ToggleAutoRefresh);
            assert!(!app.current_screen().unwrap().controller.auto_refresh_enabled());
            assert_eq!(
                app.status.as_ref().map(|s| s.text.as_str()),
                Some(t().notify.auto_refresh_unavailable)
            );
        }
    }

    #[tokio::test]
    async fn record_actions_need_a_selection() {
        let (mut app, _inbox) = app();
        open(&mut app, ScreenKind::Documents);
        update(&mut app, ContentMessage::Action(ScreenAction::Export));
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some(t().notify.no_selection)
        );
    }

    #[tokio::test]
    async fn form_actions_open_modals() {
        let (mut app, _inbox) = app();
        open(&mut app, ScreenKind::Documents);
        update(&mut app, ContentMessage::Action(ScreenAction::SyncDocuments));
        assert!(matches!(
            app.modal.active,
            Some(Modal::SyncDocuments { limit_index: Modal::DEFAULT_LIMIT_INDEX })
        ));

        open(&mut app, ScreenKind::DealChanges);
        update(&mut app, ContentMessage::Action(ScreenAction::DealHistory));
        assert!(matches!(
            app.modal.active,
            Some(Modal::DealHistory { records: None, .. })
        ));
    }
}
