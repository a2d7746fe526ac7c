//! Event 层：把 crossterm 事件翻译成 [`AppMessage`](crate::message::AppMessage)
//!
//! ```text
//! 按键 ─┬─ 弹窗打开？ ───────────▶ handle_modal_keys   → ModalMessage
//!       ├─ 正在编辑搜索框？ ──────▶ handle_search_keys  → ContentMessage::Search*
//!       ├─ 全局快捷键 ────────────▶ Quit / ShowHelp / Logout / ToggleFocus
//!       ├─ 焦点在导航 ────────────▶ NavigationMessage
//!       └─ 焦点在内容 ────────────▶ ContentMessage（按页面区分操作键）
//! ```

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
