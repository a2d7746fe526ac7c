//! 文档导出
//!
//! 把 [`ExportedDocument`] 写到导出目录（下载目录，否则当前目录）

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use integration_hub_core::types::ExportedDocument;

/// 默认导出目录
pub fn export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// 写入导出文件，同名文件会被覆盖
pub fn write_export(dir: &Path, document: &ExportedDocument) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(&document.file_name);
    std::fs::write(&path, &document.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Document exported to {}", path.display());
    Ok(path)
}
