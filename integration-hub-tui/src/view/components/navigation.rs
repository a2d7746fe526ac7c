//! 左侧导航面板组件

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::i18n::t;
use crate::model::{App, NavItemId, Page};
use crate::view::theme::{Styles, colors};

/// 导航项的翻译标签
pub fn label(id: NavItemId) -> &'static str {
    let nav = &t().nav;
    match id {
        NavItemId::Home => nav.home,
        NavItemId::WorkflowRuns => nav.workflow_runs,
        NavItemId::RunningRuns => nav.running_runs,
        NavItemId::Timeline => nav.timeline,
        NavItemId::DealChanges => nav.deal_changes,
        NavItemId::Documents => nav.documents,
        NavItemId::Connection => nav.connection,
    }
}

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            // 当前打开的页面加一个标记
            let open = if nav_item.id.page() == app.current_page {
                " •"
            } else {
                ""
            };
            let auto = auto_refresh_marker(app, nav_item.id.page());

            let content = format!("{prefix}{} {}{open}{auto}", nav_item.icon, label(nav_item.id));
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 自动刷新中的列表显示 ⟳
fn auto_refresh_marker(app: &App, page: Page) -> &'static str {
    let running = page
        .screen()
        .and_then(|kind| app.screen(kind))
        .is_some_and(|screen| screen.controller.auto_refresh_enabled());
    if running { " ⟳" } else { "" }
}
