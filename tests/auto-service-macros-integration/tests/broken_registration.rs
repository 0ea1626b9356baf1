//! 注册失败的派生类型
//!
//! 放在独立的测试二进制中，避免污染其他测试的进程级类型表。

use auto_service_macros::AutoService;
use di_abstractions::{RegistrationError, ScanOptions, TypeHandle};
use di_impl::{AutoServiceCollectionExt, ServiceCollection, TypeCatalog};
use infrastructure_common::TypePattern;

pub trait Ledger {}
pub trait Unrelated {}

#[derive(AutoService)]
#[implements(dyn Ledger)]
#[abstract_type]
#[auto_service(all_interfaces)]
pub struct AbstractLedger;

impl Ledger for AbstractLedger {}

#[derive(AutoService)]
#[implements(dyn Ledger)]
#[auto_service(singleton, all_interfaces)]
pub struct LedgerWriter;

impl Ledger for LedgerWriter {}

#[derive(AutoService)]
#[implements(dyn Ledger)]
#[auto_service(services(dyn Ledger, dyn Unrelated))]
pub struct NotImplementingService;

impl Ledger for NotImplementingService {}

#[derive(AutoService)]
#[auto_service(transient)]
pub struct ZoneCache;

#[test]
fn test_should_fail_on_unimplemented_service_type() {
    let catalog = TypeCatalog::new("broken").add::<NotImplementingService>();
    let mut services = ServiceCollection::new();

    let result = services.add_auto_services_from(&catalog);

    let error = result.unwrap_err();
    assert_eq!(
        error,
        RegistrationError::ServiceTypeMismatch {
            service_type: TypeHandle::of::<dyn Unrelated>(),
            implementation_type: TypeHandle::of::<NotImplementingService>(),
        }
    );
    let message = error.to_string();
    assert!(message.contains("NotImplementingService"));
    assert!(message.contains("Unrelated"));
    assert!(services.is_empty());
}

#[test]
fn test_abstract_type_all_interfaces_allowed() {
    // 抽象检查只作用于显式服务类型
    let mut services = ServiceCollection::new();

    services
        .add_auto_services_from(&TypeCatalog::new("abstract").add::<AbstractLedger>())
        .unwrap();

    assert_eq!(services.by_implementation::<AbstractLedger>().len(), 1);
}

#[test]
fn test_global_registration_stops_at_first_failure() {
    let mut services = ServiceCollection::new();

    let result = services.add_auto_services();

    assert!(matches!(
        result,
        Err(RegistrationError::ServiceTypeMismatch { .. })
    ));
    // 按类型名排序，失败类型之前的类型已经注册
    assert!(services.contains_of::<dyn Ledger>());
    assert_eq!(services.by_implementation::<LedgerWriter>().len(), 1);
    assert!(services.by_implementation::<NotImplementingService>().is_empty());
    assert!(services.by_implementation::<ZoneCache>().is_empty());
}

#[test]
fn test_excluding_broken_type_completes_registration() {
    let options =
        ScanOptions::new().exclude_pattern(TypePattern::new("NotImplementing*").unwrap());
    let mut services = ServiceCollection::new();

    let report = services
        .add_auto_services_with(&[TypeCatalog::from_global()], options)
        .unwrap();

    assert_eq!(report.types_excluded, 1);
    assert_eq!(report.types_registered, 3);
    assert!(services.contains_of::<ZoneCache>());
}
