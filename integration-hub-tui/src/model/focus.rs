//! 焦点状态定义

/// 焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航面板
    #[default]
    Navigation,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
