//! 自动注册标记
//!
//! 描述一个实现类型应如何注册的声明式配方

use infrastructure_common::{Lifetime, TypeHandle};
use serde::{Deserialize, Serialize};

/// 自身注册策略
///
/// 控制是否额外以实现类型自身作为服务类型注册。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfRegistration {
    /// 总是以自身注册
    Always,
    /// 仅当同一标记没有产生其他服务类型时以自身注册
    WhenNoOtherServiceType,
    /// 从不以自身注册
    Never,
}

impl Default for SelfRegistration {
    fn default() -> Self {
        Self::WhenNoOtherServiceType
    }
}

/// 自动注册标记
///
/// 附加在实现类型上的一条注册指令。显式服务类型、全部接口、自身注册
/// 是相互独立、可以同时启用的三个维度。构造完成后不可修改；
/// 构建方法都会消耗并返回新的值。
///
/// ```rust
/// use di_abstractions::{AutoService, SelfRegistration};
///
/// trait Greeter {}
///
/// let marker = AutoService::new()
///     .singleton()
///     .service::<dyn Greeter>()
///     .self_registration(SelfRegistration::Always);
/// assert_eq!(marker.service_types().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoService {
    lifetime: Lifetime,
    service_types: Vec<TypeHandle>,
    all_interfaces: bool,
    self_registration: SelfRegistration,
}

impl AutoService {
    /// 创建默认标记：作用域生命周期，仅以自身注册
    pub fn new() -> Self {
        Self {
            lifetime: Lifetime::default(),
            service_types: Vec::new(),
            all_interfaces: false,
            self_registration: SelfRegistration::default(),
        }
    }

    /// 设置生命周期
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// 单例生命周期
    pub fn singleton(self) -> Self {
        self.with_lifetime(Lifetime::Singleton)
    }

    /// 作用域生命周期
    pub fn scoped(self) -> Self {
        self.with_lifetime(Lifetime::Scoped)
    }

    /// 瞬时生命周期
    pub fn transient(self) -> Self {
        self.with_lifetime(Lifetime::Transient)
    }

    /// 添加显式服务类型
    pub fn service<S: ?Sized + 'static>(self) -> Self {
        self.service_handle(TypeHandle::of::<S>())
    }

    /// 添加显式服务类型（使用类型句柄），重复的类型只保留第一次
    pub fn service_handle(mut self, service_type: TypeHandle) -> Self {
        if !self.service_types.contains(&service_type) {
            self.service_types.push(service_type);
        }
        self
    }

    /// 以实现类型的全部接口注册
    pub fn all_interfaces(mut self) -> Self {
        self.all_interfaces = true;
        self
    }

    /// 设置自身注册策略
    pub fn self_registration(mut self, policy: SelfRegistration) -> Self {
        self.self_registration = policy;
        self
    }

    /// 生命周期
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// 显式服务类型，按声明顺序
    pub fn service_types(&self) -> &[TypeHandle] {
        &self.service_types
    }

    /// 是否以全部接口注册
    pub fn registers_all_interfaces(&self) -> bool {
        self.all_interfaces
    }

    /// 自身注册策略
    pub fn self_registration_policy(&self) -> SelfRegistration {
        self.self_registration
    }
}

impl Default for AutoService {
    fn default() -> Self {
        Self::new()
    }
}
