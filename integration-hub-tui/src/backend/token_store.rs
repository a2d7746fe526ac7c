//! 会话令牌存储
//!
//! 使用 JSON 文件保存认证令牌（键 `webhook_auth_token`），
//! 实现 integration-hub-core 的 TokenStore trait

use std::path::PathBuf;

use async_trait::async_trait;
use integration_hub_core::traits::{AUTH_TOKEN_KEY, TokenStore};
use integration_hub_core::{CoreError, CoreResult};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

use super::config_service::config_dir;

/// 基于 JSON 文件的令牌存储
pub struct FileTokenStore {
    path: PathBuf,
    /// 串行化读-改-写
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<config_dir>/integration-hub/session.json`
    pub fn default_location() -> Self {
        Self::new(config_dir().join("session.json"))
    }

    async fn read_entries(&self) -> CoreResult<Map<String, Value>> {
        if !fs::try_exists(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?
        {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> CoreResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let entries = self.read_entries().await?;
        Ok(entries
            .get(AUTH_TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string))
    }

    async fn save(&self, token: &str) -> CoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries).await
    }

    async fn clear(&self) -> CoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(AUTH_TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).await
    }
}
