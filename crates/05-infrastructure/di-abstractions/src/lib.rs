//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义声明式服务注册的核心接口。
//!
//! ## 核心接口
//!
//! - [`AutoService`] - 附加在实现类型上的注册标记
//! - [`RegistrationResolver`] - 将标记展开为 [`Binding`] 的解析器接口
//! - [`ServiceRegistry`] - 接收绑定的注册表接口
//! - [`TypeScanner`] - 候选类型扫描器接口
//! - [`AutoServiceType`] - 携带标记的类型

pub mod discovery;
pub mod marker;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use discovery::*;
pub use marker::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;

pub use infrastructure_common::{
    Lifetime, RegistrationError, RegistrationResult, TypeCapabilities, TypeDescriptor, TypeHandle,
};

/// 派生宏生成代码使用的内部路径
#[doc(hidden)]
pub mod __private {
    pub use ctor;
}
