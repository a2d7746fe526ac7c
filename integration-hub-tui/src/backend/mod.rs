//! 后端层
//!
//! ```text
//!  update 层 ──调用──▶ CoreService ──tokio::spawn──▶ integration-hub-core
//!      ▲                                                   │
//!      │      BackgroundMessage / Notification             │
//!      └──────────────────── Inbox ◀───────────────────────┘
//! ```
//!
//! 模块结构：
//!     mod config_service;     // config.toml 读写
//!     mod core_service;       // 核心服务入口，命令 → 后台任务
//!     mod export;             // 文档导出文件
//!     mod token_store;        // 会话令牌文件

mod config_service;
mod core_service;
mod export;
mod token_store;

pub use config_service::{ConfigService, FileConfigService};
pub use core_service::{CoreService, Inbox};
pub use export::{export_dir, write_export};
pub use token_store::FileTokenStore;
