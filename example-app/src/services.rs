//! 示例服务
//!
//! 这些类型通过 `#[derive(AutoService)]` 在启动时登记到进程级类型表。
//! 应用只读取注册结果，不构造实例。

#![allow(dead_code)]

use auto_service_macros::AutoService;

/// 时钟
pub trait Clock {}

/// 订单仓储
pub trait OrderRepository {}

/// 审计日志
pub trait AuditSink {}

/// 通知发送
pub trait Notifier {}

#[derive(AutoService)]
#[implements(dyn Clock)]
#[auto_service(singleton, all_interfaces)]
pub struct SystemClock;

impl Clock for SystemClock {}

/// 仓储公共部分
#[derive(AutoService)]
#[implements(dyn AuditSink)]
pub struct RepositoryBase;

impl AuditSink for RepositoryBase {}

#[derive(AutoService)]
#[implements(dyn OrderRepository)]
#[extends(RepositoryBase)]
#[auto_service(scoped, all_interfaces)]
pub struct SqlOrderRepository;

impl OrderRepository for SqlOrderRepository {}
impl AuditSink for SqlOrderRepository {}

#[derive(AutoService)]
#[implements(dyn Notifier)]
#[auto_service(transient, services(dyn Notifier))]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {}

#[derive(AutoService)]
#[implements(dyn Notifier)]
#[auto_service(transient, services(dyn Notifier), self_registration = "always")]
pub struct SmsNotifier;

impl Notifier for SmsNotifier {}

#[derive(AutoService)]
#[auto_service(transient)]
pub struct ReportFormatter;

/// 测试替身，`config/registration.toml` 中的 `Mock*` 模式会排除它
#[derive(AutoService)]
#[implements(dyn Notifier)]
#[auto_service(singleton, all_interfaces)]
pub struct MockNotifier;

impl Notifier for MockNotifier {}
