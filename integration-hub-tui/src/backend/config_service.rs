//! 配置服务
//!
//! 配置文件位置：`$INTEGRATION_HUB_CONFIG`，否则
//! `<config_dir>/integration-hub/config.toml`。文件不存在时使用默认值。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use integration_hub_core::HubConfig;

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "INTEGRATION_HUB_CONFIG";

/// 应用配置目录
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("integration-hub")
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<HubConfig>;

    /// 保存配置
    fn save(&self, config: &HubConfig) -> Result<()>;
}

/// 基于 TOML 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 按环境变量或默认位置定位配置文件
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(config_dir().join("config.toml")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<HubConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(HubConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = HubConfig::from_toml_str(&content)
            .with_context(|| format!("invalid config {}", self.path.display()))?;
        config.validate()?;

        log::info!("Config loaded from {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &HubConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = config.to_toml_string()?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = FileConfigService::new(dir.path().join("config.toml"));
        let config = service.load().unwrap();
        assert_eq!(config, HubConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "refresh_interval_secs = 30\n[endpoints]\nauth = \"https://hub.example/auth\"\n",
        )
        .unwrap();

        let config = FileConfigService::new(&path).load().unwrap();
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.endpoints.auth, "https://hub.example/auth");
        assert_eq!(
            config.endpoints.timeline,
            HubConfig::default().endpoints.timeline
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();
        assert!(FileConfigService::new(&path).load().is_err());

        std::fs::write(&path, "refresh_interval_secs = \"soon\"\n").unwrap();
        assert!(FileConfigService::new(&path).load().is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = FileConfigService::new(dir.path().join("nested").join("config.toml"));
        let config = HubConfig {
            language: "ru-RU".to_string(),
            ..HubConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }
}
