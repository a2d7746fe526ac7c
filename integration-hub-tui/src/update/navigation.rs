//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                open_page(app, id.page());
            }
        }
    }
}

/// 进入页面；第一次进入时开始加载
fn open_page(app: &mut App, page: Page) {
    app.current_page = page;
    app.clear_status();
    if page != Page::Home {
        app.focus = FocusPanel::Content;
    }

    match page {
        Page::Home => {}
        Page::List(kind) => {
            if let Some(screen) = app.screen_mut(kind)
                && !screen.loaded
            {
                screen.loaded = true;
                screen.controller.spawn_refresh(screen.query_filter());
            }
        }
        Page::Connection => {
            if !app.connection.loaded && !app.connection.loading {
                app.connection.loading = true;
                app.core.load_connection();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use integration_hub_core::types::ScreenKind;

    use super::*;
    use crate::update::test_support::app;

    #[tokio::test]
    async fn confirm_opens_list_and_starts_first_load() {
        let (mut app, _inbox) = app();
        app.navigation.select_next();
        update(&mut app, NavigationMessage::Confirm);

        assert_eq!(app.current_page, Page::List(ScreenKind::WorkflowRuns));
        assert_eq!(app.focus, FocusPanel::Content);

        let screen = app.screen(ScreenKind::WorkflowRuns).map(|s| s.loaded);
        assert_eq!(screen, Some(true));
        // 其它列表尚未加载
        assert_eq!(app.screen(ScreenKind::Documents).map(|s| s.loaded), Some(false));
    }

    #[tokio::test]
    async fn home_keeps_focus_on_navigation() {
        let (mut app, _inbox) = app();
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Home);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }

    #[tokio::test]
    async fn connection_page_loads_once() {
        let (mut app, _inbox) = app();
        update(&mut app, NavigationMessage::SelectLast);
        update(&mut app, NavigationMessage::Confirm);
        assert_eq!(app.current_page, Page::Connection);
        assert!(app.connection.loading);
    }
}
