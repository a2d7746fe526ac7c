//! 首页视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    // 欢迎信息 + 会话概况 + 诊断输出
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.description),
            Styles::label(),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let (session, session_color) = if app.authenticated {
        (texts.home.signed_in, c.success)
    } else {
        (texts.home.signed_out, c.warning)
    };
    let interval = app.core.config().refresh_interval();
    let log_file = app
        .home
        .log_file
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());

    let row = |label: &str, value: Span<'static>| {
        Line::from(vec![
            Span::styled(format!("  {label:<24}"), Styles::label()),
            value,
        ])
    };
    let overview = vec![
        row(
            texts.home.session,
            Span::styled(session, Style::default().fg(session_color)),
        ),
        row(
            texts.home.refresh_interval,
            Span::styled(format!("{}s", interval.as_secs()), Style::default().fg(c.fg)),
        ),
        row(
            texts.home.log_file,
            Span::styled(log_file, Style::default().fg(c.fg)),
        ),
    ];
    frame.render_widget(Paragraph::new(overview), layout[1]);

    let block = Block::default()
        .title(format!(" {} ", texts.home.diagnostics))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let diagnostics = match &app.home.diagnostics {
        Some(text) => Paragraph::new(text.clone()).style(Style::default().fg(c.fg)),
        None => Paragraph::new(Line::styled(texts.home.no_diagnostics, Styles::muted())),
    };
    frame.render_widget(
        diagnostics.block(block).wrap(Wrap { trim: false }),
        layout[2],
    );
}
