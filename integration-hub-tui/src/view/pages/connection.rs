//! ERP 连接页视图

use integration_hub_core::types::ConnectionStatus;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = &app.connection;

    let mut lines = vec![Line::from("")];

    if state.loading && !state.loaded {
        lines.push(Line::styled(format!("  {}", texts.common.loading), Styles::muted()));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let Some(connection) = &state.connection else {
        lines.push(Line::styled(
            format!("  {}", texts.connection.not_configured),
            Styles::label(),
        ));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    lines.push(Line::styled(
        format!("  {}", texts.connection.active),
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(""));

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {label:<12}"), Styles::label()),
            Span::styled(value, Style::default().fg(c.fg)),
        ])
    };
    if !connection.name.is_empty() {
        lines.push(field(texts.connection.name, connection.name.clone()));
    }
    lines.push(field(texts.connection.url, connection.url.clone()));
    lines.push(field(texts.connection.username, connection.username.clone()));

    let (status, color) = match state.status {
        Some(ConnectionStatus::Online) => (texts.connection.online, c.success),
        Some(ConnectionStatus::Offline) => (texts.connection.offline, c.error),
        None => (texts.connection.unknown, c.muted),
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<12}", texts.connection.status), Styles::label()),
        Span::styled(format!("● {status}"), Style::default().fg(color)),
    ]));

    if state.loading {
        lines.push(Line::from(""));
        lines.push(Line::styled(format!("  {}", texts.common.loading), Styles::muted()));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
