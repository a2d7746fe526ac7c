//! View 层：只读 Model，渲染 UI
//!
//! ```text
//! layout
//!  ├── 标题栏
//!  ├── components::navigation │ pages::{home, list, connection}
//!  ├── components::statusbar
//!  └── components::modal（最上层）
//! ```

mod components;
mod layout;
mod pages;
mod theme;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub use layout::render;

/// 按显示宽度截断，超出部分以 `…` 结尾
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// 左对齐并补齐到固定显示宽度
pub(crate) fn pad(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(cut.width());
    format!("{cut}{}", " ".repeat(fill))
}
