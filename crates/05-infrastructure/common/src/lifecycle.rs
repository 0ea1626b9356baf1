//! 服务生命周期标签

use crate::errors::ConfigError;
use serde::Serialize;
use std::fmt;

/// 服务生命周期类型
///
/// 注册解析器只原样传递该标签，具体语义由外部注册表解释。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// 单例模式 - 整个应用生命周期内只创建一个实例
    Singleton,
    /// 作用域模式 - 在同一作用域内共享实例
    Scoped,
    /// 瞬时模式 - 每次请求都创建新实例
    Transient,
}

impl Default for Lifetime {
    /// 默认按逻辑工作单元注册一次
    fn default() -> Self {
        Self::Scoped
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Singleton => "singleton",
            Self::Scoped => "scoped",
            Self::Transient => "transient",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Lifetime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "singleton" => Ok(Self::Singleton),
            "scoped" => Ok(Self::Scoped),
            "transient" => Ok(Self::Transient),
            _ => Err(ConfigError::ValidationError {
                message: format!("未知的生命周期: {}", s),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetime_is_scoped() {
        assert_eq!(Lifetime::default(), Lifetime::Scoped);
    }

    #[test]
    fn test_parse_lifetime() {
        assert_eq!("Singleton".parse::<Lifetime>().unwrap(), Lifetime::Singleton);
        assert_eq!("transient".parse::<Lifetime>().unwrap(), Lifetime::Transient);
        assert!("pooled".parse::<Lifetime>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for lifetime in [Lifetime::Singleton, Lifetime::Scoped, Lifetime::Transient] {
            assert_eq!(lifetime.to_string().parse::<Lifetime>().unwrap(), lifetime);
        }
    }
}
