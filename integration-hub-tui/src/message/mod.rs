//! 消息层
//!
//! ```text
//! 按键 ──▶ event::handle_event ──▶ AppMessage ──▶ update::update ──▶ Model
//!                                      ▲
//! 后台任务 ── BackgroundMessage ───────┤
//! 控制器   ── Notification ────────────┘
//! ```
//!
//! 键盘产生的消息与后台任务产生的消息走同一个 `update` 入口。

mod app;
mod background;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use background::BackgroundMessage;
pub use content::{ContentMessage, ScreenAction};
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
