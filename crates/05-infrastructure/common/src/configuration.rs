//! 注册配置
//!
//! 通过 `config` crate 从配置文件和环境变量加载自动注册选项

use crate::conventions::TypePattern;
use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "AUTO_SERVICE";

/// 环境变量层级分隔符
pub const ENV_SEPARATOR: &str = "__";

/// 自动注册选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationOptions {
    /// 扫描时跳过的类型名称模式
    pub exclude_types: Vec<String>,
    /// 日志配置
    pub logging: LoggingConfig,
}

impl RegistrationOptions {
    /// 加载配置
    ///
    /// 配置文件（可选，格式由扩展名决定）优先级低于 `AUTO_SERVICE__*` 环境变量。
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            debug!("加载注册配置文件: {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("exclude_types"),
            )
            .build()?;

        let options: Self = settings.try_deserialize()?;
        options.validate()?;
        Ok(options)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.exclude_patterns()?;
        self.logging.level()?;
        Ok(())
    }

    /// 解析排除模式
    pub fn exclude_patterns(&self) -> ConfigResult<Vec<TypePattern>> {
        self.exclude_types.iter().map(TypePattern::new).collect()
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            show_target: true,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 解析日志级别
    pub fn level(&self) -> ConfigResult<tracing::Level> {
        self.level
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::ValidationError {
                message: format!("未知的日志级别: {}", self.level),
            })
    }
}
