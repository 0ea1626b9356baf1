//! 注册表扩展方法

use crate::catalog::TypeCatalog;
use crate::registrar::{AutoServiceRegistrar, RegistrationReport};
use di_abstractions::{ScanOptions, ServiceRegistry, TypeScanner};
use infrastructure_common::RegistrationResult;

/// 自动注册扩展 trait
///
/// 为任意 [`ServiceRegistry`] 提供自动注册入口。
pub trait AutoServiceCollectionExt: ServiceRegistry {
    /// 注册进程级登记表中的全部类型
    fn add_auto_services(&mut self) -> RegistrationResult<RegistrationReport> {
        self.add_auto_services_from(&TypeCatalog::from_global())
    }

    /// 注册指定目录中的类型
    fn add_auto_services_from(&mut self, catalog: &TypeCatalog) -> RegistrationResult<RegistrationReport> {
        self.add_auto_services_with(std::slice::from_ref(catalog), ScanOptions::default())
    }

    /// 注册多个目录中的类型，重复出现的类型只注册一次
    fn add_auto_services_from_all(&mut self, catalogs: &[TypeCatalog]) -> RegistrationResult<RegistrationReport> {
        self.add_auto_services_with(catalogs, ScanOptions::default())
    }

    /// 使用扫描选项注册多个目录中的类型
    fn add_auto_services_with(
        &mut self,
        catalogs: &[TypeCatalog],
        options: ScanOptions,
    ) -> RegistrationResult<RegistrationReport> {
        let catalog = match catalogs {
            [single] => single.clone(),
            _ => {
                let name = catalogs
                    .iter()
                    .map(TypeScanner::name)
                    .collect::<Vec<_>>()
                    .join("+");
                TypeCatalog::merge(name, catalogs)
            }
        };

        AutoServiceRegistrar::new()
            .with_options(options)
            .register(&catalog, self)
    }
}

impl<T: ServiceRegistry + ?Sized> AutoServiceCollectionExt for T {}
