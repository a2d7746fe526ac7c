//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use integration_hub_core::types::NotificationLevel;

use crate::i18n::t;
use crate::model::{App, ListScreenState, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(status) = &app.status {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(status.text.clone(), status_style(status.level)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 状态栏底色是蓝色，错误用反色块突出
fn status_style(level: NotificationLevel) -> Style {
    match level {
        NotificationLevel::Info => Style::default().fg(Color::White),
        NotificationLevel::Success => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        NotificationLevel::Error => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    if app.modal.is_open() {
        return vec![
            ("Tab", h.next_field),
            ("Enter", h.confirm),
            ("Esc", h.cancel),
        ];
    }
    if app.is_editing_search() {
        return vec![("Enter", h.confirm), ("Esc", h.cancel)];
    }

    let mut hints = vec![("Tab", h.switch_panel)];

    if app.focus.is_navigation() {
        hints.push(("↑↓", h.navigate));
        hints.push(("Enter", h.open));
    } else {
        match app.current_page {
            Page::Home => {}
            Page::List(kind) => {
                if let Some(screen) = app.screen(kind) {
                    list_hints(screen, &mut hints);
                }
            }
            Page::Connection => {
                hints.push(("r", h.reload));
                hints.push(("t / e", h.actions));
            }
        }
    }

    hints.push(("?", h.help));
    hints.push(("q", h.quit));
    hints
}

fn list_hints(screen: &ListScreenState, hints: &mut Vec<(&'static str, &'static str)>) {
    let h = &t().hints;
    let caps = screen.kind.capabilities();

    hints.push(("↑↓", h.navigate));
    if caps.has_detail_expansion {
        hints.push(("Enter", h.expand));
    }
    hints.push(("r", h.reload));
    if caps.has_auto_refresh {
        hints.push(("a", h.auto_refresh));
    }
    if screen.supports_search() {
        hints.push(("/", h.search));
    }
    if screen.supports_status() {
        hints.push(("s", h.status));
    }
    if screen.supports_source() {
        hints.push(("m", h.source));
    }
}
