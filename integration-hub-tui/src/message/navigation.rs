//! 导航相关消息

/// 导航消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    /// 进入选中的页面
    Confirm,
    SelectFirst,
    SelectLast,
}
