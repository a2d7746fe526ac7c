//! Integration Hub TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 启动顺序：
//!
//! ```text
//! init_logging()              日志写入文件（终端被 UI 占用）
//! FileConfigService::load()   读取 config.toml，缺失时写一份默认模板
//! tokio runtime + enter()     update 层可以直接 tokio::spawn
//! CoreService::new()          列表控制器与服务，返回收件箱
//! restore_session()           后台读取令牌，结果决定是否弹出登录框
//! app::run()                  主循环
//! restore_terminal()          无论成功与否都恢复终端
//! ```

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};

use backend::{ConfigService, CoreService, FileConfigService, FileTokenStore};
use i18n::{Language, set_language};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志；失败时照常运行，只是没有日志文件
    let log_file = match init_logging() {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("logging disabled: {e:#}");
            None
        }
    };

    // 2. 配置
    let config_service = FileConfigService::from_env();
    let config = config_service.load()?;
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Could not write default config: {e:#}");
        } else {
            log::info!("Default config written to {}", config_service.path().display());
        }
    }
    set_language(Language::from_code(&config.language).unwrap_or_default());

    // 3. 异步运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("integration-hub-worker")
        .build()
        .context("failed to start async runtime")?;
    let _guard = runtime.enter();

    // 4. 核心服务
    let token_store = Arc::new(FileTokenStore::default_location());
    let (core, mut inbox) = CoreService::new(config, token_store)?;
    core.restore_session();
    let mut app = model::App::new(core, log_file);

    // 5. 终端与主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut inbox);
    restore_terminal(&mut terminal)?;

    app.shutdown();
    log::info!("Integration Hub TUI stopped");
    result
}
