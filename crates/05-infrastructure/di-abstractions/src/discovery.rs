//! 自动注册类型发现
//!
//! 定义携带标记的类型，以及进程级的类型登记表

use crate::marker::AutoService;
use infrastructure_common::{TypeDescriptor, TypeHandle};

/// 可自动注册的类型 trait
///
/// 通常由 `#[derive(AutoService)]` 生成，也可以手动实现。
pub trait AutoServiceType: 'static {
    /// 类型关系元数据
    fn type_descriptor() -> TypeDescriptor;

    /// 按声明顺序附加在类型上的标记；为空表示不参与自动注册
    fn auto_services() -> Vec<AutoService>;
}

/// 带标记的候选类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedType {
    /// 类型描述符
    pub descriptor: TypeDescriptor,
    /// 标记列表
    pub markers: Vec<AutoService>,
}

impl MarkedType {
    /// 创建新的候选类型
    pub fn new(descriptor: TypeDescriptor, markers: Vec<AutoService>) -> Self {
        Self {
            descriptor,
            markers,
        }
    }

    /// 从实现了 [`AutoServiceType`] 的类型创建
    pub fn of<T: AutoServiceType>() -> Self {
        Self::new(T::type_descriptor(), T::auto_services())
    }

    /// 类型句柄
    pub fn handle(&self) -> TypeHandle {
        self.descriptor.handle()
    }

    /// 是否携带至少一个标记
    pub fn is_marked(&self) -> bool {
        !self.markers.is_empty()
    }
}

/// 进程级自动注册类型登记表
static GLOBAL_AUTO_SERVICE_TYPES: once_cell::sync::Lazy<parking_lot::RwLock<Vec<fn() -> MarkedType>>> =
    once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(Vec::new()));

/// 登记类型到进程级登记表
///
/// 由派生宏生成的启动钩子调用；同一类型重复登记只会出现一次。
pub fn register_global<T: AutoServiceType>() {
    GLOBAL_AUTO_SERVICE_TYPES.write().push(MarkedType::of::<T>);
}

/// 获取进程级登记表中的全部类型
///
/// 启动钩子的执行顺序不确定，因此按完整类型名称排序，保证每次运行的发现顺序一致。
pub fn global_marked_types() -> Vec<MarkedType> {
    let mut types: Vec<MarkedType> = GLOBAL_AUTO_SERVICE_TYPES
        .read()
        .iter()
        .map(|factory| factory())
        .collect();
    types.sort_by(|a, b| a.handle().cmp(&b.handle()));
    types.dedup_by(|a, b| a.handle() == b.handle());
    types
}
