//! ITN 配置模块
//!
//! 统一的配置管理，从 ~/.config/itn-core/config.toml 加载
//!
//! 每个语言转换器可以单独开关；配置文件不存在时使用默认配置

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ItnError, ItnResult};

/// ITN 完整配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItnConfig {
    /// 启用中文转换器
    #[serde(default = "default_enabled")]
    pub chinese: bool,
    /// 启用日语转换器
    #[serde(default = "default_enabled")]
    pub japanese: bool,
    /// 启用英语转换器
    #[serde(default = "default_enabled")]
    pub english: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ItnConfig {
    fn default() -> Self {
        Self {
            chinese: true,
            japanese: true,
            english: true,
        }
    }
}

impl ItnConfig {
    /// 加载配置文件
    ///
    /// 配置文件不存在时返回默认配置（全部语言启用）
    pub fn load() -> ItnResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| ItnError::ConfigParse {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("📋 加载配置成功: {:?}", config_path);
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> ItnResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ItnError::ConfigParse {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(&config_path, content)?;

        tracing::info!("保存配置成功: {:?}", config_path);
        Ok(())
    }

    /// 获取配置文件路径
    fn config_path() -> ItnResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ItnError::ConfigDirNotFound)?;
        Ok(config_dir.join("itn-core").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all() {
        let config = ItnConfig::default();
        assert!(config.chinese);
        assert!(config.japanese);
        assert!(config.english);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ItnConfig {
            chinese: true,
            japanese: false,
            english: true,
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: ItnConfig = toml::from_str(&text).unwrap();
        assert!(parsed.chinese);
        assert!(!parsed.japanese);
        assert!(parsed.english);
    }

    #[test]
    fn test_missing_fields_default_to_enabled() {
        let parsed: ItnConfig = toml::from_str("japanese = false").unwrap();
        assert!(parsed.chinese);
        assert!(!parsed.japanese);
        assert!(parsed.english);
    }
}
