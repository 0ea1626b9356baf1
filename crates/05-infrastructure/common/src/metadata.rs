//! 元数据定义
//!
//! 提供类型句柄和类型能力描述，供注册解析器查询实现类型的接口与继承关系

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型句柄
///
/// 可比较的类型标识，相等性与哈希只取决于 [`TypeId`]，
/// 既可以表示具体类型，也可以表示 `dyn Trait` 形式的接口类型。
#[derive(Debug, Clone, Copy)]
pub struct TypeHandle {
    id: TypeId,
    name: &'static str,
}

impl TypeHandle {
    /// 从类型获取类型句柄
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称（包含模块路径）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        let name = self.name.strip_prefix("dyn ").unwrap_or(self.name);
        // 泛型参数里也可能出现 `::`，只在第一个 `<` 之前截取
        let head = name.split('<').next().unwrap_or(name);
        let start = head.rfind("::").map(|i| i + 2).unwrap_or(0);
        &name[start..]
    }

    /// 检查句柄是否指向类型 `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeHandle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeHandle {
    /// 按类型名称排序，名称相同时再比较 [`TypeId`]
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 类型能力查询
///
/// 注册解析器对实现类型的唯一视图：枚举已实现的接口，并判断可赋值性。
pub trait TypeCapabilities {
    /// 类型自身的句柄
    fn type_handle(&self) -> TypeHandle;

    /// 类型（传递地）实现的全部接口，按声明顺序
    fn implemented_interfaces(&self) -> &[TypeHandle];

    /// 是否为抽象类型
    fn is_abstract(&self) -> bool;

    /// 类型是否可以作为 `service` 注册：等于自身、实现该接口或继承自该类型
    fn is_assignable_to(&self, service: &TypeHandle) -> bool;
}

/// 类型描述符
///
/// 记录实现类型的静态关系元数据：实现的接口表与继承链。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    handle: TypeHandle,
    interfaces: Vec<TypeHandle>,
    base_types: Vec<TypeHandle>,
    is_abstract: bool,
}

impl TypeDescriptor {
    /// 为类型 `T` 创建描述符
    pub fn of<T: 'static>() -> Self {
        Self::new(TypeHandle::of::<T>())
    }

    /// 从类型句柄创建描述符
    pub fn new(handle: TypeHandle) -> Self {
        Self {
            handle,
            interfaces: Vec::new(),
            base_types: Vec::new(),
            is_abstract: false,
        }
    }

    /// 声明实现的接口
    pub fn implements<I: ?Sized + 'static>(self) -> Self {
        self.implements_handle(TypeHandle::of::<I>())
    }

    /// 声明实现的接口（使用类型句柄）
    pub fn implements_handle(mut self, interface: TypeHandle) -> Self {
        push_unique(&mut self.interfaces, interface);
        self
    }

    /// 声明基类型，不继承其接口
    pub fn extends<B: 'static>(mut self) -> Self {
        push_unique(&mut self.base_types, TypeHandle::of::<B>());
        self
    }

    /// 声明基类型，并传递地继承其基类型链和接口
    pub fn extends_descriptor(mut self, base: &TypeDescriptor) -> Self {
        push_unique(&mut self.base_types, base.handle);
        for ancestor in &base.base_types {
            push_unique(&mut self.base_types, *ancestor);
        }
        for interface in &base.interfaces {
            push_unique(&mut self.interfaces, *interface);
        }
        self
    }

    /// 标记为抽象类型
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// 类型句柄
    pub fn handle(&self) -> TypeHandle {
        self.handle
    }

    /// 基类型链，最近的基类型在前
    pub fn base_types(&self) -> &[TypeHandle] {
        &self.base_types
    }

    /// 检查是否实现了指定接口
    pub fn implements_interface(&self, interface: &TypeHandle) -> bool {
        self.interfaces.contains(interface)
    }
}

impl TypeCapabilities for TypeDescriptor {
    fn type_handle(&self) -> TypeHandle {
        self.handle
    }

    fn implemented_interfaces(&self) -> &[TypeHandle] {
        &self.interfaces
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn is_assignable_to(&self, service: &TypeHandle) -> bool {
        self.handle == *service
            || self.interfaces.contains(service)
            || self.base_types.contains(service)
    }
}

fn push_unique(handles: &mut Vec<TypeHandle>, handle: TypeHandle) {
    if !handles.contains(&handle) {
        handles.push(handle);
    }
}
