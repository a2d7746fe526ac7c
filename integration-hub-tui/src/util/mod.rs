//! 工具层：终端初始化/恢复与日志
//!
//! ```text
//! ┌────────────┐  draw   ┌──────────┐
//! │  app.rs    │ ──────▶ │ terminal │  备用屏幕 + raw mode
//! └────────────┘         └──────────┘
//!       │ log / tracing
//!       ▼
//! ┌────────────┐
//! │ logging.rs │  写入 <data_local_dir>/integration-hub/integration-hub.log
//! └────────────┘
//! ```

mod logging;
mod terminal;

pub use logging::{init_logging, log_file_path};
pub use terminal::{Term, init_terminal, install_panic_hook, restore_terminal};
