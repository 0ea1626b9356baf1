//! 类型扫描器抽象接口
//!
//! 提供候选类型的枚举能力和扫描排除选项

use crate::discovery::MarkedType;
use infrastructure_common::{ConfigResult, RegistrationOptions, TypeDescriptor, TypePattern};
use std::sync::Arc;

/// 类型扫描器 trait
///
/// 按确定的发现顺序枚举候选类型。
pub trait TypeScanner: Send + Sync {
    /// 获取扫描器名称
    fn name(&self) -> &str;

    /// 扫描候选类型
    fn scan(&self) -> Vec<MarkedType>;
}

/// 排除条件函数类型
pub type ExcludeCondition = Arc<dyn Fn(&TypeDescriptor) -> bool + Send + Sync>;

/// 扫描选项
#[derive(Clone, Default)]
pub struct ScanOptions {
    /// 排除的类型名称模式
    pub exclude_patterns: Vec<TypePattern>,
    /// 额外的排除条件
    pub exclude_conditions: Vec<ExcludeCondition>,
}

impl ScanOptions {
    /// 创建新的扫描选项
    pub fn new() -> Self {
        Self::default()
    }

    /// 从注册配置创建
    pub fn from_options(options: &RegistrationOptions) -> ConfigResult<Self> {
        Ok(Self {
            exclude_patterns: options.exclude_patterns()?,
            exclude_conditions: Vec::new(),
        })
    }

    /// 添加排除模式
    pub fn exclude_pattern(mut self, pattern: TypePattern) -> Self {
        self.exclude_patterns.push(pattern);
        self
    }

    /// 添加排除条件
    pub fn exclude_when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&TypeDescriptor) -> bool + Send + Sync + 'static,
    {
        self.exclude_conditions.push(Arc::new(condition));
        self
    }

    /// 检查类型是否被排除，返回命中的模式或条件描述
    pub fn exclusion_reason(&self, descriptor: &TypeDescriptor) -> Option<String> {
        let handle = descriptor.handle();
        if let Some(pattern) = self.exclude_patterns.iter().find(|p| p.matches(&handle)) {
            return Some(format!("模式 {}", pattern.as_str()));
        }
        self.exclude_conditions
            .iter()
            .position(|condition| condition(descriptor))
            .map(|index| format!("排除条件 #{}", index))
    }

    /// 检查类型是否被排除
    pub fn is_excluded(&self, descriptor: &TypeDescriptor) -> bool {
        self.exclusion_reason(descriptor).is_some()
    }
}

impl std::fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOptions")
            .field("exclude_patterns", &self.exclude_patterns)
            .field(
                "exclude_conditions",
                &format!("<{} conditions>", self.exclude_conditions.len()),
            )
            .finish()
    }
}
