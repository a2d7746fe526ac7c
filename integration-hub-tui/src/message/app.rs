//! 应用主消息

use integration_hub_core::types::Notification;

use super::{BackgroundMessage, ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    Navigation(NavigationMessage),

    Content(ContentMessage),

    Modal(ModalMessage),

    /// 后台任务完成
    Background(BackgroundMessage),

    /// 控制器或后台任务发出的通知，显示在状态栏
    Notify(Notification),

    /// 关闭弹窗或回到导航面板
    GoBack,

    ShowHelp,

    /// 注销并弹出登录框
    Logout,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
