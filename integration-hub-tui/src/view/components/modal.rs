//! 弹窗组件

use integration_hub_core::types::{Record, SYNC_LIMITS};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::truncate;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::Login { .. } => render_login(frame, modal),
        Modal::SyncDocuments { limit_index } => render_sync(frame, *limit_index),
        Modal::ConfirmClear => render_confirm_clear(frame),
        Modal::CheckDeal { deal_id } => render_check_deal(frame, deal_id),
        Modal::Rollback { .. } => render_rollback(frame, modal),
        Modal::DealHistory {
            deal_id,
            records,
            scroll,
        } => render_history(frame, deal_id, records.as_deref(), *scroll),
        Modal::EditConnection { .. } => render_connection(frame, modal),
        Modal::Diagnostics { text, scroll } => render_text(
            frame,
            t().modal.diagnostics_title,
            text,
            *scroll,
        ),
        Modal::Help { scroll } => render_help(frame, *scroll),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清空背景并画边框，返回内容区域
fn open_frame(frame: &mut Frame, title: &str, width: u16, height: u16, color: Color) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 输入框：标签一行，值一行，空一行
fn input_lines(label: &str, value: &str, focused: bool, secret: bool) -> Vec<Line<'static>> {
    let shown = if secret {
        "•".repeat(value.chars().count().min(24))
    } else {
        value.to_string()
    };
    let (text, style) = if focused {
        (format!("  {shown}▎"), Style::default().fg(Color::Cyan))
    } else {
        (format!("  {shown}"), Style::default().fg(Color::White))
    };
    vec![
        Line::styled(label.to_string(), Style::default().fg(Color::Gray)),
        Line::styled(text, style),
        Line::from(""),
    ]
}

fn hint_line(text: &str) -> Line<'static> {
    Line::styled(format!("  {text}"), Style::default().fg(Color::DarkGray))
}

fn render_login(frame: &mut Frame, modal: &Modal) {
    let Modal::Login {
        username,
        password,
        focus,
        pending,
        error,
    } = modal
    else {
        return;
    };
    let texts = &t().modal;

    let inner = open_frame(frame, texts.login_title, 48, 13, Color::Cyan);

    let mut lines = Vec::new();
    lines.extend(input_lines(texts.username, username, *focus == 0 && !pending, false));
    lines.extend(input_lines(texts.password, password, *focus == 1 && !pending, true));

    if *pending {
        lines.push(Line::styled(
            format!("  {}", texts.logging_in),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(err) = error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(texts.submit_hint));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_sync(frame: &mut Frame, limit_index: usize) {
    let texts = &t().modal;
    let inner = open_frame(frame, texts.sync_title, 44, 8, Color::Cyan);

    let limit = SYNC_LIMITS[limit_index.min(SYNC_LIMITS.len() - 1)];
    let lines = vec![
        Line::styled(texts.limit.to_string(), Style::default().fg(Color::Gray)),
        Line::styled(
            format!("  ◀ {limit} ▶"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        hint_line(&format!("←→ · {}", texts.submit_hint)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_confirm_clear(frame: &mut Frame) {
    let texts = &t().modal;
    let inner = open_frame(frame, texts.clear_title, 48, 7, Color::Red);

    let lines = vec![
        Line::from(""),
        Line::styled(texts.clear_confirm.to_string(), Style::default().fg(Color::White)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_check_deal(frame: &mut Frame, deal_id: &str) {
    let texts = &t().modal;
    let inner = open_frame(frame, texts.check_deal_title, 44, 8, Color::Cyan);

    let mut lines = input_lines(texts.deal_id, deal_id, true, false);
    lines.push(hint_line(texts.submit_hint));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_rollback(frame: &mut Frame, modal: &Modal) {
    let Modal::Rollback {
        deal_id,
        target_stage_id,
        focus,
    } = modal
    else {
        return;
    };
    let texts = &t().modal;
    let inner = open_frame(frame, texts.rollback_title, 48, 11, Color::Yellow);

    let mut lines = input_lines(texts.deal_id, deal_id, *focus == 0, false);
    lines.extend(input_lines(
        texts.target_stage_id,
        target_stage_id,
        *focus == 1,
        false,
    ));
    lines.push(hint_line(texts.submit_hint));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_history(frame: &mut Frame, deal_id: &str, records: Option<&[Record]>, scroll: u16) {
    let texts = &t().modal;

    let Some(records) = records else {
        let inner = open_frame(frame, texts.history_title, 44, 8, Color::Cyan);
        let mut lines = input_lines(texts.deal_id, deal_id, true, false);
        lines.push(hint_line(texts.submit_hint));
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    };

    let title = format!("{} #{deal_id}", texts.history_title);
    let area = frame.area();
    let width = area.width.saturating_sub(8).min(100);
    let height = area.height.saturating_sub(4).min(24);
    let inner = open_frame(frame, &title, width, height, Color::Cyan);

    if records.is_empty() {
        let lines = vec![Line::styled(
            texts.no_history.to_string(),
            Style::default().fg(Color::Gray),
        )];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let line_width = usize::from(inner.width);
    let lines: Vec<Line> = records
        .iter()
        .map(|record| {
            let summary = record
                .fields
                .keys()
                .filter_map(|key| record.field_str(key).map(|v| format!("{key}={v}")))
                .collect::<Vec<_>>()
                .join("  ");
            Line::from(vec![
                Span::styled(format!("#{} ", record.id), Style::default().fg(Color::Yellow)),
                Span::styled(truncate(&summary, line_width), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn render_connection(frame: &mut Frame, modal: &Modal) {
    let Modal::EditConnection {
        url,
        username,
        password,
        focus,
    } = modal
    else {
        return;
    };
    let texts = &t().modal;
    let inner = open_frame(frame, texts.connection_title, 56, 14, Color::Cyan);

    let mut lines = input_lines(texts.url, url, *focus == 0, false);
    lines.extend(input_lines(texts.username, username, *focus == 1, false));
    lines.extend(input_lines(texts.password, password, *focus == 2, true));
    lines.push(hint_line(texts.submit_hint));
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 可滚动的纯文本弹窗
fn render_text(frame: &mut Frame, title: &str, text: &str, scroll: u16) {
    let area = frame.area();
    let width = area.width.saturating_sub(8).min(100);
    let height = area.height.saturating_sub(4).min(30);
    let inner = open_frame(frame, title, width, height, Color::Cyan);

    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

fn render_help(frame: &mut Frame, scroll: u16) {
    let help = &t().help;
    let area = frame.area();
    let height = area.height.saturating_sub(2).min(40);
    let inner = open_frame(frame, t().modal.help_title, 60, height, Color::Cyan);

    let sections = [
        (help.global, help.lines_global),
        (help.lists, help.lines_lists),
        (help.documents, help.lines_documents),
        (help.deals, help.lines_deals),
        (help.runs, help.lines_runs),
        (help.connection, help.lines_connection),
    ];

    let mut lines = Vec::new();
    for (title, entries) in sections {
        lines.push(Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
