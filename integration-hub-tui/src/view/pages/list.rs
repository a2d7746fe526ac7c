//! 列表页视图
//!
//! 五个列表页共用：过滤条 + 错误横幅 + 记录列表 + 展开的详情。

use integration_hub_core::ControllerState;
use integration_hub_core::types::{Record, ScreenKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::model::ListScreenState;
use crate::view::theme::{Styles, colors};
use crate::view::{pad, truncate};

const STATUS_WIDTH: usize = 12;

/// 页面标题
pub fn title(kind: ScreenKind) -> &'static str {
    let nav = &t().nav;
    match kind {
        ScreenKind::WorkflowRuns => nav.workflow_runs,
        ScreenKind::RunningRuns => nav.running_runs,
        ScreenKind::Timeline => nav.timeline,
        ScreenKind::DealChanges => nav.deal_changes,
        ScreenKind::Documents => nav.documents,
    }
}

/// 渲染列表页
pub fn render(screen: &ListScreenState, frame: &mut Frame, area: Rect) {
    screen.controller.with_state(|state| {
        let has_error = state.error.is_some();
        let expanded = state.selected_id.is_some() && screen.kind.capabilities().has_detail_expansion;

        let mut constraints = vec![Constraint::Length(1)];
        if has_error {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(3));
        if expanded {
            constraints.push(Constraint::Percentage(45));
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut next = 0;
        render_filter_bar(screen, state, frame, rows[next]);
        next += 1;
        if let Some(error) = &state.error {
            render_error_banner(error, frame, rows[next]);
            next += 1;
        }
        render_records(screen, state, frame, rows[next]);
        next += 1;
        if expanded {
            render_detail(state, frame, rows[next]);
        }
    });
}

/// 过滤条：条数、搜索、状态、数据源、自动刷新、加载中
fn render_filter_bar(screen: &ListScreenState, state: &ControllerState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let label = Styles::label();
    let value = Style::default().fg(c.fg).add_modifier(Modifier::BOLD);
    let sep = Span::styled("  ", label);

    let visible = screen.visible_records(state).len();
    let count = if visible == state.records.len() {
        visible.to_string()
    } else {
        format!("{visible}/{}", state.records.len())
    };
    let mut spans = vec![
        Span::styled(count, value),
        Span::styled(format!(" {}", texts.list.records), label),
    ];

    if screen.supports_search() {
        spans.push(sep.clone());
        spans.push(Span::styled(format!("{}: ", texts.list.search), label));
        match &screen.search_draft {
            Some(draft) => spans.push(Span::styled(
                format!("{draft}▎"),
                Style::default().fg(c.highlight),
            )),
            None if screen.search_text.is_empty() => {
                spans.push(Span::styled(texts.list.search_placeholder, Styles::muted()));
            }
            None => spans.push(Span::styled(screen.search_text.clone(), value)),
        }
    }

    if screen.supports_status() {
        spans.push(sep.clone());
        spans.push(Span::styled(format!("{}: ", texts.list.status), label));
        let status = match screen.status_filter() {
            "all" => texts.common.all,
            other => other,
        };
        spans.push(Span::styled(status, value));
    }

    if screen.supports_source() {
        spans.push(sep.clone());
        spans.push(Span::styled(format!("{}: ", texts.list.source), label));
        spans.push(Span::styled(screen.source_mode.as_str(), value));
    }

    if screen.kind.capabilities().has_auto_refresh {
        spans.push(sep.clone());
        spans.push(Span::styled(format!("{}: ", texts.list.auto_refresh), label));
        let (text, color) = if state.auto_refresh_enabled {
            (texts.common.on, c.success)
        } else {
            (texts.common.off, c.muted)
        };
        spans.push(Span::styled(text, Style::default().fg(color)));
    }

    if state.loading {
        spans.push(sep);
        spans.push(Span::styled(texts.common.loading, Style::default().fg(c.warning)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error_banner(error: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let text = format!(" ⚠ {}: {error}", t().common.error);
    let width = usize::from(area.width);
    let banner = Paragraph::new(truncate(&text, width))
        .style(Style::default().fg(c.error).add_modifier(Modifier::BOLD));
    frame.render_widget(banner, area);
}

fn render_records(screen: &ListScreenState, state: &ControllerState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let visible = screen.visible_records(state);

    if visible.is_empty() {
        let message = if state.loading && state.records.is_empty() {
            texts.common.loading
        } else if state.records.is_empty() {
            texts.list.no_records
        } else {
            texts.list.no_matches
        };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(format!("  {message}"), Styles::muted()),
        ]);
        frame.render_widget(empty, area);
        return;
    }

    let width = usize::from(area.width);
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record_item(
                screen.kind,
                record,
                i == screen.cursor,
                state.is_expanded(&record.id),
                width,
            )
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(screen.cursor.min(visible.len() - 1)));

    let list = List::new(items).highlight_style(Styles::selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// 一行记录：展开标记 + 状态 + 标题 + ID
fn record_item(
    kind: ScreenKind,
    record: &Record,
    is_cursor: bool,
    is_expanded: bool,
    width: usize,
) -> ListItem<'static> {
    let c = colors();

    let marker = match (kind.capabilities().has_detail_expansion, is_expanded) {
        (true, true) => "▼ ",
        (true, false) => "▶ ",
        (false, _) => "  ",
    };
    let status = record.status.clone().unwrap_or_default();
    let status_color = c.status(&status);
    let title = record
        .field_str(kind.title_field())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| record.id.clone());
    let id = format!("  #{}", record.id);

    let fixed = 2 + STATUS_WIDTH + 1 + id.chars().count();
    let title = truncate(&title, width.saturating_sub(fixed));

    let title_style = if is_cursor {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Styles::muted()),
        Span::styled(pad(&status, STATUS_WIDTH), Style::default().fg(status_color)),
        Span::raw(" "),
        Span::styled(title, title_style),
        Span::styled(id, Styles::muted()),
    ]))
}

/// 展开记录的详情
fn render_detail(state: &ControllerState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let title = state
        .selected_id
        .as_deref()
        .map_or_else(String::new, |id| format!(" {} #{id} ", texts.list.detail));

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::TOP)
        .border_style(Styles::border(false));

    let body = if state.detail_loading {
        Paragraph::new(Line::styled(texts.list.detail_loading, Styles::muted()))
    } else if let Some(detail) = &state.detail {
        Paragraph::new(detail.to_pretty_string()).wrap(Wrap { trim: false })
    } else {
        Paragraph::new(Line::styled(texts.common.no_data, Styles::muted()))
    };

    frame.render_widget(body.block(block), area);
}
