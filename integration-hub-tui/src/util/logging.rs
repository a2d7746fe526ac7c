//! 日志初始化
//!
//! 终端被 UI 占用，日志只写文件。级别由 `INTEGRATION_HUB_LOG` 控制
//! （语法同 `RUST_LOG`），默认 `info`。core / provider 通过 `log` 门面输出，
//! 由 tracing-subscriber 的 `tracing-log` 特性桥接进来。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// 日志级别环境变量
pub const LOG_ENV: &str = "INTEGRATION_HUB_LOG";

const LOG_FILE_NAME: &str = "integration-hub.log";

/// 日志文件位置
pub fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("integration-hub")
        .join(LOG_FILE_NAME)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 安装全局 subscriber，返回日志文件路径
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(
        "Integration Hub TUI v{} starting, log level from {LOG_ENV}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(path)
}
