//! 应用主状态

use std::path::PathBuf;

use integration_hub_core::types::{Notification, NotificationLevel, ScreenKind};

use super::{
    ConnectionState, FocusPanel, HomeState, ListScreenState, Modal, ModalState, NavigationState,
    Page,
};
use crate::backend::CoreService;

/// 状态栏上的一条消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub level: NotificationLevel,
    pub text: String,
}

impl From<Notification> for StatusLine {
    fn from(notification: Notification) -> Self {
        Self {
            level: notification.level,
            text: format!("{}: {}", notification.title, notification.message),
        }
    }
}

/// 应用主状态
pub struct App {
    pub should_quit: bool,

    pub focus: FocusPanel,

    pub navigation: NavigationState,

    pub current_page: Page,

    /// 状态栏消息
    pub status: Option<StatusLine>,

    /// 会话是否持有令牌
    pub authenticated: bool,

    // === 各页面状态 ===
    /// 列表页，顺序同 `ScreenKind::ALL`
    pub screens: Vec<ListScreenState>,
    pub connection: ConnectionState,
    pub home: HomeState,

    pub modal: ModalState,

    pub core: CoreService,
}

impl App {
    /// 创建应用实例，为每个列表页建立控制器（此时不发请求）
    pub fn new(core: CoreService, log_file: Option<PathBuf>) -> Self {
        let screens = ScreenKind::ALL
            .into_iter()
            .map(|kind| ListScreenState::new(kind, core.controller(kind)))
            .collect();

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status: None,
            authenticated: false,
            screens,
            connection: ConnectionState::new(),
            home: HomeState::new(log_file),
            modal: ModalState::new(),
            core,
        }
    }

    pub fn screen(&self, kind: ScreenKind) -> Option<&ListScreenState> {
        self.screens.iter().find(|s| s.kind == kind)
    }

    pub fn screen_mut(&mut self, kind: ScreenKind) -> Option<&mut ListScreenState> {
        self.screens.iter_mut().find(|s| s.kind == kind)
    }

    /// 当前页面对应的列表页
    pub fn current_screen(&self) -> Option<&ListScreenState> {
        self.current_page.screen().and_then(|kind| self.screen(kind))
    }

    pub fn current_screen_mut(&mut self) -> Option<&mut ListScreenState> {
        let kind = self.current_page.screen()?;
        self.screen_mut(kind)
    }

    /// 当前是否在编辑搜索框（此时普通按键都当作输入）
    pub fn is_editing_search(&self) -> bool {
        self.current_screen()
            .is_some_and(ListScreenState::is_editing_search)
    }

    pub fn set_status(&mut self, level: NotificationLevel, text: impl Into<String>) {
        self.status = Some(StatusLine {
            level,
            text: text.into(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// 会话失效：弹出登录框
    pub fn require_login(&mut self) {
        self.authenticated = false;
        if !self.modal.is_login() {
            self.modal.show(Modal::login());
        }
    }

    /// 停止所有定时器，忽略仍在途中的响应
    pub fn shutdown(&mut self) {
        for screen in &mut self.screens {
            screen.controller.shutdown();
        }
    }
}
