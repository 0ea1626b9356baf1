//! # AutoService Macros
//!
//! 提供 `#[derive(AutoService)]`，在编译期生成类型的注册元数据，
//! 并在程序启动时把类型登记到进程级类型表。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use auto_service_macros::AutoService;
//!
//! pub trait OrderRepository {}
//!
//! #[derive(AutoService)]
//! #[implements(dyn OrderRepository)]
//! #[auto_service(singleton, all_interfaces)]
//! pub struct SqlOrderRepository;
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod auto_service;
mod utils;

/// 自动服务派生宏
///
/// 为类型实现 `di_abstractions::AutoServiceType`，并生成启动时登记代码。
///
/// # 辅助属性
///
/// - `#[auto_service(...)]` - 一个注册标记，可重复；参数：
///   - `singleton` / `scoped` / `transient` - 生命周期（默认 scoped）
///   - `services(Type, ...)` - 显式服务类型
///   - `all_interfaces` - 以全部已实现接口注册
///   - `self_registration = "always" | "when_no_other" | "never"` - 自身注册策略
/// - `#[implements(dyn Trait, ...)]` - 已实现的接口
/// - `#[extends(Base, ...)]` - 基类型，基类型也必须派生 `AutoService`
/// - `#[abstract_type]` - 抽象类型，不能作为实现注册
///
/// 不支持泛型类型。
#[proc_macro_derive(AutoService, attributes(auto_service, implements, extends, abstract_type))]
pub fn derive_auto_service(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    auto_service::derive_auto_service_impl(input)
}
