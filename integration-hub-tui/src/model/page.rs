//! 页面定义

use integration_hub_core::types::ScreenKind;

/// 页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页：会话、配置与诊断结果
    #[default]
    Home,
    /// 由轮询控制器驱动的列表页
    List(ScreenKind),
    /// ERP 连接设置
    Connection,
}

impl Page {
    /// 列表页对应的屏幕
    pub fn screen(self) -> Option<ScreenKind> {
        match self {
            Page::List(kind) => Some(kind),
            Page::Home | Page::Connection => None,
        }
    }
}
