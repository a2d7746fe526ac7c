//! 主题和样式定义

use integration_hub_core::types::NotificationLevel;
use ratatui::style::{Color, Modifier, Style};

/// 当前颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub modal_bg: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            modal_bg: Color::Black,
        }
    }

    /// 通知级别对应的颜色
    pub fn level(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Info => self.fg,
            NotificationLevel::Success => self.success,
            NotificationLevel::Error => self.error,
        }
    }

    /// 记录状态对应的颜色
    pub fn status(&self, status: &str) -> Color {
        match status.to_ascii_lowercase().as_str() {
            "completed" | "success" | "done" | "synced" => self.success,
            "running" | "pending" | "in_progress" => self.warning,
            "error" | "failed" | "terminated" => self.error,
            _ => self.muted,
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_ignore_case() {
        let c = colors();
        assert_eq!(c.status("COMPLETED"), c.success);
        assert_eq!(c.status("Running"), c.warning);
        assert_eq!(c.status("terminated"), c.error);
        assert_eq!(c.status("whatever"), c.muted);
    }
}
