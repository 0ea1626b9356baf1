//! 类型名称约定匹配
//!
//! 提供基于通配符的类型名称模式，用于在扫描时排除类型

use crate::errors::ConfigError;
use crate::metadata::TypeHandle;

/// 类型名称模式
///
/// 使用 glob 语法（`*`、`?`、`[...]`）；模式同时与简短名称和完整名称比较。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePattern {
    pattern: glob::Pattern,
}

impl TypePattern {
    /// 创建新的类型名称模式
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "类型排除模式不能为空".to_string(),
            });
        }
        let pattern = glob::Pattern::new(&pattern).map_err(|e| ConfigError::ValidationError {
            message: format!("无效的类型排除模式 {}: {}", pattern, e),
        })?;
        Ok(Self { pattern })
    }

    /// 原始模式字符串
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// 检查类型是否匹配此模式
    pub fn matches(&self, handle: &TypeHandle) -> bool {
        self.pattern.matches(handle.short_name()) || self.pattern.matches(handle.name())
    }
}
