//! 自动注册器
//!
//! 扫描候选类型，调用解析器，并把绑定追加到注册表

use crate::resolver::DefaultRegistrationResolver;
use chrono::{DateTime, Utc};
use di_abstractions::{Binding, RegistrationResolver, ScanOptions, ServiceRegistry, TypeScanner};
use infrastructure_common::{Lifetime, RegistrationResult};
use serde::Serialize;
use tracing::{debug, error, info};

/// 报告中的一条绑定记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRecord {
    /// 服务类型完整名称
    pub service_type: String,
    /// 实现类型完整名称
    pub implementation_type: String,
    /// 生命周期
    pub lifetime: Lifetime,
}

impl From<&Binding> for BindingRecord {
    fn from(binding: &Binding) -> Self {
        Self {
            service_type: binding.service_type.name().to_string(),
            implementation_type: binding.implementation_type.name().to_string(),
            lifetime: binding.lifetime,
        }
    }
}

/// 注册报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    /// 扫描器名称
    pub scanner: String,
    /// 扫描到的类型数量
    pub types_scanned: usize,
    /// 完成注册的类型数量
    pub types_registered: usize,
    /// 被排除的类型数量
    pub types_excluded: usize,
    /// 追加的绑定数量
    pub bindings_added: usize,
    /// 按追加顺序记录的绑定
    pub bindings: Vec<BindingRecord>,
    /// 完成时间
    pub completed_at: DateTime<Utc>,
}

impl RegistrationReport {
    fn new(scanner: impl Into<String>) -> Self {
        Self {
            scanner: scanner.into(),
            types_scanned: 0,
            types_registered: 0,
            types_excluded: 0,
            bindings_added: 0,
            bindings: Vec::new(),
            completed_at: Utc::now(),
        }
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 自动注册器
///
/// 单线程按发现顺序处理类型：每个类型先完整解析，再整体追加。
/// 遇到第一个错误立即中止，已处理类型的绑定保留在注册表中。
#[derive(Debug, Clone, Default)]
pub struct AutoServiceRegistrar<R = DefaultRegistrationResolver> {
    resolver: R,
    options: ScanOptions,
}

impl AutoServiceRegistrar {
    /// 使用默认解析器创建注册器
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: RegistrationResolver> AutoServiceRegistrar<R> {
    /// 使用指定解析器创建注册器
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            resolver,
            options: ScanOptions::default(),
        }
    }

    /// 设置扫描选项
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// 扫描选项
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// 扫描并注册全部候选类型
    pub fn register<G>(
        &self,
        scanner: &dyn TypeScanner,
        registry: &mut G,
    ) -> RegistrationResult<RegistrationReport>
    where
        G: ServiceRegistry + ?Sized,
    {
        let mut report = RegistrationReport::new(scanner.name());
        debug!("开始自动注册，扫描器: {}", scanner.name());

        for candidate in scanner.scan() {
            report.types_scanned += 1;

            if !candidate.is_marked() {
                debug!("类型没有注册标记，跳过: {}", candidate.handle());
                continue;
            }

            if let Some(reason) = self.options.exclusion_reason(&candidate.descriptor) {
                debug!("类型被排除 ({}): {}", reason, candidate.handle());
                report.types_excluded += 1;
                continue;
            }

            let bindings = self
                .resolver
                .resolve(&candidate.descriptor, &candidate.markers)
                .map_err(|e| {
                    error!(
                        "自动注册中止，已注册 {} 个类型: {}",
                        report.types_registered, e
                    );
                    e
                })?;

            report.bindings_added += bindings.len();
            report
                .bindings
                .extend(bindings.iter().map(BindingRecord::from));
            report.types_registered += 1;
            registry.add_all(bindings);
        }

        report.completed_at = Utc::now();
        info!(
            "自动注册完成 [{}]: 扫描 {} 个类型，注册 {} 个类型，排除 {} 个类型，添加 {} 条绑定",
            report.scanner,
            report.types_scanned,
            report.types_registered,
            report.types_excluded,
            report.bindings_added
        );
        Ok(report)
    }
}
