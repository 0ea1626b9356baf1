//! 错误类型定义

use crate::metadata::TypeHandle;
use thiserror::Error;

/// 服务注册错误类型
///
/// 两种错误都表示标记使用不当，而不是运行环境故障。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("不允许将抽象类型注册为服务实现: {implementation_type}")]
    AbstractImplementationNotAllowed { implementation_type: TypeHandle },

    #[error("服务实现类型 {implementation_type} 不是服务类型 {service_type} 的实现")]
    ServiceTypeMismatch {
        service_type: TypeHandle,
        implementation_type: TypeHandle,
    },
}

impl RegistrationError {
    /// 创建抽象类型错误
    pub fn abstract_implementation(implementation_type: TypeHandle) -> Self {
        Self::AbstractImplementationNotAllowed {
            implementation_type,
        }
    }

    /// 创建服务类型不匹配错误
    pub fn service_type_mismatch(service_type: TypeHandle, implementation_type: TypeHandle) -> Self {
        Self::ServiceTypeMismatch {
            service_type,
            implementation_type,
        }
    }

    /// 出错的实现类型
    pub fn implementation_type(&self) -> TypeHandle {
        match self {
            Self::AbstractImplementationNotAllowed {
                implementation_type,
            }
            | Self::ServiceTypeMismatch {
                implementation_type,
                ..
            } => *implementation_type,
        }
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::ParseError {
            source: Box::new(source),
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("服务注册错误: {source}")]
    RegistrationError {
        #[from]
        source: RegistrationError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type RegistrationResult<T> = Result<T, RegistrationError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
