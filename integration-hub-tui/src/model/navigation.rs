//! 左侧导航状态

use integration_hub_core::types::ScreenKind;

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    WorkflowRuns,
    RunningRuns,
    Timeline,
    DealChanges,
    Documents,
    Connection,
}

impl NavItemId {
    /// 导航项对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::Home => Page::Home,
            NavItemId::WorkflowRuns => Page::List(ScreenKind::WorkflowRuns),
            NavItemId::RunningRuns => Page::List(ScreenKind::RunningRuns),
            NavItemId::Timeline => Page::List(ScreenKind::Timeline),
            NavItemId::DealChanges => Page::List(ScreenKind::DealChanges),
            NavItemId::Documents => Page::List(ScreenKind::Documents),
            NavItemId::Connection => Page::Connection,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        let item = |id, icon| NavItem { id, icon };
        Self {
            items: vec![
                item(NavItemId::Home, "⌂"),
                item(NavItemId::WorkflowRuns, "≡"),
                item(NavItemId::RunningRuns, "▶"),
                item(NavItemId::Timeline, "◷"),
                item(NavItemId::DealChanges, "Δ"),
                item(NavItemId::Documents, "▤"),
                item(NavItemId::Connection, "⇄"),
            ],
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
