//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use integration_hub_core::types::ScreenKind;

use crate::event::keymap::{DefaultKeymap, KeyBinding};
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage, ScreenAction};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if app.focus.is_content() && app.is_editing_search() {
        return handle_search_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::Logout;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 导航面板
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Enter | KeyCode::Right => NavigationMessage::Confirm,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

/// 内容面板
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Home => AppMessage::Noop,
        Page::Connection => handle_connection_keys(&key),
        Page::List(kind) => handle_list_keys(key, kind),
    }
}

/// 列表页通用按键 + 页面专属操作
fn handle_list_keys(key: KeyEvent, kind: ScreenKind) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(ContentMessage::SelectNext),
        KeyCode::Home => Some(ContentMessage::SelectFirst),
        KeyCode::End => Some(ContentMessage::SelectLast),
        _ => None,
    };
    if let Some(msg) = msg {
        return AppMessage::Content(msg);
    }

    let common: [(KeyBinding, ContentMessage); 6] = [
        (DefaultKeymap::EXPAND, ContentMessage::ToggleExpand),
        (DefaultKeymap::RELOAD, ContentMessage::Reload),
        (DefaultKeymap::AUTO_REFRESH, ContentMessage::ToggleAutoRefresh),
        (DefaultKeymap::SEARCH, ContentMessage::StartSearch),
        (DefaultKeymap::CYCLE_STATUS, ContentMessage::CycleStatus),
        (DefaultKeymap::TOGGLE_SOURCE, ContentMessage::ToggleSource),
    ];
    if let Some((_, msg)) = common.iter().find(|(binding, _)| binding.matches(&key)) {
        return AppMessage::Content(*msg);
    }

    screen_actions(kind)
        .iter()
        .find(|(binding, _)| binding.matches(&key))
        .map_or(AppMessage::Noop, |(_, action)| {
            AppMessage::Content(ContentMessage::Action(*action))
        })
}

/// 各列表页的专属操作键
fn screen_actions(kind: ScreenKind) -> &'static [(KeyBinding, ScreenAction)] {
    match kind {
        ScreenKind::Documents => &[
            (DefaultKeymap::SYNC_DOCUMENTS, ScreenAction::SyncDocuments),
            (DefaultKeymap::CLEAR_DOCUMENTS, ScreenAction::ClearDocuments),
            (DefaultKeymap::CREATE_DEAL, ScreenAction::CreateDeal),
            (DefaultKeymap::CHECK_DEAL, ScreenAction::CheckDeal),
            (DefaultKeymap::SYNC_WITH_CRM, ScreenAction::SyncWithCrm),
            (DefaultKeymap::ENRICH_DOCUMENT, ScreenAction::EnrichDocument),
            (DefaultKeymap::ENRICH_ALL, ScreenAction::EnrichAll),
            (DefaultKeymap::EXPORT, ScreenAction::Export),
        ],
        ScreenKind::DealChanges => &[
            (DefaultKeymap::ROLLBACK, ScreenAction::Rollback),
            (DefaultKeymap::ENRICH_USERS, ScreenAction::EnrichUsers),
            (DefaultKeymap::DEAL_HISTORY, ScreenAction::DealHistory),
        ],
        ScreenKind::WorkflowRuns | ScreenKind::RunningRuns => &[
            (DefaultKeymap::TEST_DIRECT_API, ScreenAction::TestDirectApi),
            (DefaultKeymap::CHECK_DB_TABLES, ScreenAction::CheckDbTables),
        ],
        ScreenKind::Timeline => &[],
    }
}

/// ERP 连接页
fn handle_connection_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::RELOAD.matches(key) {
        AppMessage::Content(ContentMessage::Reload)
    } else if DefaultKeymap::TEST_CONNECTION.matches(key) {
        AppMessage::Content(ContentMessage::Action(ScreenAction::TestConnection))
    } else if DefaultKeymap::EDIT_CONNECTION.matches(key) {
        AppMessage::Content(ContentMessage::Action(ScreenAction::EditConnection))
    } else {
        AppMessage::Noop
    }
}

/// 搜索框编辑中
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc => ContentMessage::CancelSearch,
        KeyCode::Enter => ContentMessage::SubmitSearch,
        KeyCode::Backspace => ContentMessage::SearchBackspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            ContentMessage::SearchInput(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 登录框不能关闭，Ctrl+C 直接退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return if app.modal.is_login() {
            AppMessage::Quit
        } else {
            AppMessage::Modal(ModalMessage::Close)
        };
    }

    let has_inputs = app
        .modal
        .active
        .as_ref()
        .is_some_and(crate::model::Modal::has_inputs);

    let msg = match key.code {
        KeyCode::Esc => ModalMessage::Close,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Tab => ModalMessage::NextField,
        KeyCode::BackTab => ModalMessage::PrevField,
        KeyCode::Up if has_inputs => ModalMessage::PrevField,
        KeyCode::Down if has_inputs => ModalMessage::NextField,
        KeyCode::Up => ModalMessage::ScrollUp,
        KeyCode::Down => ModalMessage::ScrollDown,
        KeyCode::Left => ModalMessage::PrevOption,
        KeyCode::Right => ModalMessage::NextOption,
        KeyCode::Backspace => ModalMessage::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            ModalMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn list_keys_map_to_content_messages() {
        assert!(matches!(
            handle_list_keys(press(KeyCode::Enter), ScreenKind::WorkflowRuns),
            AppMessage::Content(ContentMessage::ToggleExpand)
        ));
        assert!(matches!(
            handle_list_keys(press(KeyCode::Char('a')), ScreenKind::Timeline),
            AppMessage::Content(ContentMessage::ToggleAutoRefresh)
        ));
        assert!(matches!(
            handle_list_keys(press(KeyCode::Char('/')), ScreenKind::Documents),
            AppMessage::Content(ContentMessage::StartSearch)
        ));
    }

    #[test]
    fn actions_depend_on_screen() {
        assert!(matches!(
            handle_list_keys(press(KeyCode::Char('x')), ScreenKind::Documents),
            AppMessage::Content(ContentMessage::Action(ScreenAction::Export))
        ));
        assert!(matches!(
            handle_list_keys(press(KeyCode::Char('x')), ScreenKind::DealChanges),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_list_keys(press(KeyCode::Char('o')), ScreenKind::DealChanges),
            AppMessage::Content(ContentMessage::Action(ScreenAction::Rollback))
        ));
    }

    #[test]
    fn shifted_letters_match_with_or_without_modifier() {
        let with_shift = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT);
        let without = press(KeyCode::Char('E'));
        for key in [with_shift, without] {
            assert!(matches!(
                handle_list_keys(key, ScreenKind::Documents),
                AppMessage::Content(ContentMessage::Action(ScreenAction::EnrichAll))
            ));
        }
        assert!(matches!(
            handle_list_keys(press(KeyCode::Char('e')), ScreenKind::Documents),
            AppMessage::Content(ContentMessage::Action(ScreenAction::EnrichDocument))
        ));
    }

    #[test]
    fn search_mode_captures_letters() {
        assert!(matches!(
            handle_search_keys(press(KeyCode::Char('q'))),
            AppMessage::Content(ContentMessage::SearchInput('q'))
        ));
        assert!(matches!(
            handle_search_keys(press(KeyCode::Esc)),
            AppMessage::Content(ContentMessage::CancelSearch)
        ));
    }

    #[test]
    fn connection_page_keys() {
        assert!(matches!(
            handle_connection_keys(&press(KeyCode::Char('t'))),
            AppMessage::Content(ContentMessage::Action(ScreenAction::TestConnection))
        ));
        assert!(matches!(
            handle_connection_keys(&press(KeyCode::Char('y'))),
            AppMessage::Noop
        ));
    }
}
