//! 类型目录
//!
//! 显式的候选类型登记表，代替运行时程序集扫描

use di_abstractions::{global_marked_types, AutoServiceType, MarkedType, TypeScanner};
use infrastructure_common::TypeHandle;
use tracing::debug;

/// 进程级目录名称
pub const GLOBAL_CATALOG_NAME: &str = "global";

/// 类型目录
///
/// 按加入顺序保存候选类型，同一类型只保留第一次加入的记录。
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    name: String,
    entries: Vec<MarkedType>,
}

impl TypeCatalog {
    /// 创建新的类型目录
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// 从进程级登记表创建目录，顺序按完整类型名称排序
    pub fn from_global() -> Self {
        global_marked_types()
            .into_iter()
            .fold(Self::new(GLOBAL_CATALOG_NAME), Self::add_marked)
    }

    /// 合并多个目录，保留首次出现的顺序并去掉重复类型
    pub fn merge<'a, I>(name: impl Into<String>, catalogs: I) -> Self
    where
        I: IntoIterator<Item = &'a TypeCatalog>,
    {
        catalogs
            .into_iter()
            .flat_map(|catalog| catalog.entries.iter().cloned())
            .fold(Self::new(name), Self::add_marked)
    }

    /// 添加实现了 [`AutoServiceType`] 的类型
    pub fn add<T: AutoServiceType>(self) -> Self {
        self.add_marked(MarkedType::of::<T>())
    }

    /// 添加候选类型
    pub fn add_marked(mut self, marked: MarkedType) -> Self {
        if self.contains(&marked.handle()) {
            debug!("类型已在目录 {} 中，忽略: {}", self.name, marked.handle());
        } else {
            self.entries.push(marked);
        }
        self
    }

    /// 检查类型是否在目录中
    pub fn contains(&self, handle: &TypeHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle() == *handle)
    }

    /// 目录中的类型数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 遍历候选类型
    pub fn iter(&self) -> std::slice::Iter<'_, MarkedType> {
        self.entries.iter()
    }
}

impl TypeScanner for TypeCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn scan(&self) -> Vec<MarkedType> {
        self.entries.clone()
    }
}
