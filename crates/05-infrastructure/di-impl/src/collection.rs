//! 服务集合
//!
//! 按追加顺序保存绑定的注册表实现

use di_abstractions::{Binding, ServiceRegistry};
use infrastructure_common::TypeHandle;

/// 服务集合
///
/// 同一服务类型可以有多条绑定；按服务类型查找时返回全部实现，
/// 单个查找时以最后一次注册为准。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCollection {
    bindings: Vec<Binding>,
}

impl ServiceCollection {
    /// 创建空的服务集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定数量
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// 遍历全部绑定
    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// 获取服务类型的全部绑定，按注册顺序
    pub fn get_all(&self, service_type: &TypeHandle) -> Vec<&Binding> {
        self.bindings
            .iter()
            .filter(|binding| binding.service_type == *service_type)
            .collect()
    }

    /// 获取服务类型 `S` 的全部绑定
    pub fn get_all_of<S: ?Sized + 'static>(&self) -> Vec<&Binding> {
        self.get_all(&TypeHandle::of::<S>())
    }

    /// 获取服务类型的生效绑定（最后一次注册）
    pub fn get(&self, service_type: &TypeHandle) -> Option<&Binding> {
        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.service_type == *service_type)
    }

    /// 获取服务类型 `S` 的生效绑定
    pub fn get_of<S: ?Sized + 'static>(&self) -> Option<&Binding> {
        self.get(&TypeHandle::of::<S>())
    }

    /// 检查服务类型 `S` 是否已注册
    pub fn contains_of<S: ?Sized + 'static>(&self) -> bool {
        self.get_of::<S>().is_some()
    }

    /// 获取实现类型 `T` 的全部绑定
    pub fn by_implementation<T: 'static>(&self) -> Vec<&Binding> {
        let implementation_type = TypeHandle::of::<T>();
        self.bindings
            .iter()
            .filter(|binding| binding.implementation_type == implementation_type)
            .collect()
    }

    /// 清空服务集合
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl ServiceRegistry for ServiceCollection {
    fn add(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}
