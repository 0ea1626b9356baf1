//! 注册解析器抽象接口
//!
//! 将实现类型上的标记展开为具体的服务绑定

use crate::marker::AutoService;
use infrastructure_common::{Lifetime, RegistrationResult, TypeCapabilities, TypeHandle};
use std::fmt;

/// 服务绑定
///
/// 一条解析结果：以 `service_type` 查找时由 `implementation_type` 提供实例。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    /// 服务类型
    pub service_type: TypeHandle,
    /// 实现类型
    pub implementation_type: TypeHandle,
    /// 生命周期
    pub lifetime: Lifetime,
}

impl Binding {
    /// 创建新的服务绑定
    pub fn new(service_type: TypeHandle, implementation_type: TypeHandle, lifetime: Lifetime) -> Self {
        Self {
            service_type,
            implementation_type,
            lifetime,
        }
    }

    /// 是否以实现类型自身作为服务类型
    pub fn is_self_binding(&self) -> bool {
        self.service_type == self.implementation_type
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.service_type, self.implementation_type, self.lifetime
        )
    }
}

/// 注册解析器 trait
///
/// 纯函数：相同输入总是得到相同的有序绑定列表或相同的错误。
pub trait RegistrationResolver: Send + Sync {
    /// 按标记声明顺序解析实现类型的全部绑定
    ///
    /// 任一标记失败时整个实现类型失败，不返回部分结果。
    fn resolve(
        &self,
        implementation: &dyn TypeCapabilities,
        markers: &[AutoService],
    ) -> RegistrationResult<Vec<Binding>>;
}
