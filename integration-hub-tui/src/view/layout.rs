//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let session = if app.authenticated {
        t().home.signed_in
    } else {
        t().home.signed_out
    };
    let title = format!(
        " {} v{} · {session}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    );
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let page_title = match app.current_page {
        Page::Home => t().nav.home,
        Page::List(kind) => pages::list::title(kind),
        Page::Connection => t().nav.connection,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Home => pages::home::render(app, frame, inner),
        Page::List(kind) => {
            if let Some(screen) = app.screen(kind) {
                pages::list::render(screen, frame, inner);
            }
        }
        Page::Connection => pages::connection::render(app, frame, inner),
    }
}
