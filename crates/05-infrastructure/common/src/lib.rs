//! # Infrastructure Common
//!
//! 这个 crate 提供了服务自动注册系统的公共类型和工具。
//!
//! ## 核心组件
//!
//! - [`TypeHandle`] / [`TypeDescriptor`] - 类型标识与类型关系元数据
//! - [`TypeCapabilities`] - 注册解析器使用的类型能力查询
//! - [`Lifetime`] - 服务生命周期标签
//! - [`RegistrationError`] - 注册解析错误
//! - [`RegistrationOptions`] - 自动注册配置
//!
//! ## 设计原则
//!
//! - 基于静态类型关系元数据，而不是运行时反射
//! - 生命周期只是标签，由外部注册表解释

pub mod configuration;
pub mod conventions;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use configuration::*;
pub use conventions::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
