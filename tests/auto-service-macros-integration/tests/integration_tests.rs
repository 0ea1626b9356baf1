//! 派生宏集成测试

use auto_service_macros::AutoService;
use di_abstractions::{AutoServiceType, Lifetime, SelfRegistration, TypeHandle};
use di_impl::{AutoServiceCollectionExt, ServiceCollection, TypeCatalog};

pub trait TestA {}
pub trait TestB {}
pub trait BaseA {}
pub trait BaseB {}

#[derive(AutoService)]
#[implements(dyn TestA)]
#[auto_service(transient, services(dyn TestA))]
pub struct SingleImplementation;

impl TestA for SingleImplementation {}

#[derive(AutoService)]
#[auto_service(self_registration = "always")]
pub struct SingleSelfImplementation;

#[derive(AutoService)]
#[auto_service(transient)]
pub struct SingleTransient;

#[derive(AutoService)]
#[auto_service(singleton)]
pub struct SingleSingleton;

#[derive(AutoService)]
#[auto_service(scoped)]
pub struct SingleScoped;

#[derive(AutoService)]
#[implements(dyn TestA, dyn TestB)]
#[auto_service(self_registration = "always")]
#[auto_service(transient, services(dyn TestA, dyn TestB))]
pub struct MultipleImplementation;

impl TestA for MultipleImplementation {}
impl TestB for MultipleImplementation {}

#[derive(AutoService)]
#[implements(dyn TestA, dyn TestB)]
#[auto_service(transient, services(dyn TestA, dyn TestB), self_registration = "always")]
pub struct MultipleImplementationSimple;

impl TestA for MultipleImplementationSimple {}
impl TestB for MultipleImplementationSimple {}

#[derive(AutoService)]
#[implements(dyn BaseA, dyn BaseB)]
#[auto_service(transient)]
pub struct BaseImplementation;

impl BaseA for BaseImplementation {}
impl BaseB for BaseImplementation {}

#[derive(AutoService)]
#[extends(BaseImplementation)]
#[auto_service(transient, all_interfaces)]
pub struct ChildImplementation;

impl BaseA for ChildImplementation {}
impl BaseB for ChildImplementation {}

#[derive(AutoService)]
#[extends(BaseImplementation)]
#[auto_service(transient, services(BaseImplementation))]
pub struct InheritedImplementation;

#[derive(AutoService)]
#[implements(dyn TestB)]
#[auto_service(singleton, all_interfaces, self_registration = "never")]
#[auto_service(self_registration = "never")]
pub struct SilentImplementation;

impl TestB for SilentImplementation {}

/// 派生了宏但没有注册标记
#[derive(AutoService)]
#[implements(dyn BaseA)]
pub struct UnmarkedBase;

impl BaseA for UnmarkedBase {}

fn services_from_global() -> ServiceCollection {
    let mut services = ServiceCollection::new();
    services
        .add_auto_services_from(&TypeCatalog::from_global())
        .unwrap();
    services
}

#[test]
fn test_derive_generates_descriptor() {
    let descriptor = ChildImplementation::type_descriptor();

    assert_eq!(descriptor.handle(), TypeHandle::of::<ChildImplementation>());
    assert_eq!(descriptor.base_types(), &[TypeHandle::of::<BaseImplementation>()]);
    assert!(descriptor.implements_interface(&TypeHandle::of::<dyn BaseA>()));
    assert!(descriptor.implements_interface(&TypeHandle::of::<dyn BaseB>()));
}

#[test]
fn test_derive_generates_markers_in_source_order() {
    let markers = MultipleImplementation::auto_services();

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].lifetime(), Lifetime::Scoped);
    assert_eq!(markers[0].self_registration_policy(), SelfRegistration::Always);
    assert_eq!(markers[1].lifetime(), Lifetime::Transient);
    assert_eq!(
        markers[1].service_types(),
        &[TypeHandle::of::<dyn TestA>(), TypeHandle::of::<dyn TestB>()]
    );
}

#[test]
fn test_derive_without_markers() {
    assert!(UnmarkedBase::auto_services().is_empty());
}

#[test]
fn test_should_register_interface() {
    let services = services_from_global();

    assert!(services.contains_of::<dyn TestA>());
}

#[test]
fn test_should_register_self() {
    let services = services_from_global();

    let binding = services.get_of::<SingleSelfImplementation>().unwrap();
    assert!(binding.is_self_binding());
}

#[test]
fn test_should_register_multiple_auto_services() {
    let services = services_from_global();

    assert_eq!(services.by_implementation::<MultipleImplementation>().len(), 3);
    assert_eq!(
        services.by_implementation::<MultipleImplementationSimple>().len(),
        3
    );
}

#[test]
fn test_should_register_child_auto_services() {
    let services = services_from_global();

    let bindings = services.by_implementation::<ChildImplementation>();
    assert_eq!(bindings.len(), 2);
    assert!(bindings[0].service_type.is::<dyn BaseA>());
    assert!(bindings[1].service_type.is::<dyn BaseB>());
}

#[test]
fn test_should_register_as_inherited_implementation() {
    let services = services_from_global();

    let bindings = services.get_all_of::<BaseImplementation>();
    assert_eq!(bindings.len(), 2);
    assert!(bindings
        .iter()
        .any(|binding| binding.implementation_type.is::<InheritedImplementation>()));
}

#[test]
fn test_should_register_correct_lifetime() {
    let services = services_from_global();

    let cases = [
        (TypeHandle::of::<SingleSingleton>(), Lifetime::Singleton),
        (TypeHandle::of::<SingleScoped>(), Lifetime::Scoped),
        (TypeHandle::of::<SingleTransient>(), Lifetime::Transient),
    ];
    for (service_type, lifetime) in cases {
        let matching: Vec<_> = services
            .iter()
            .filter(|binding| binding.service_type == service_type && binding.lifetime == lifetime)
            .collect();
        assert_eq!(matching.len(), 1, "{} 应只注册一次", service_type);
    }
}

#[test]
fn test_never_policy_suppresses_self_binding() {
    let services = services_from_global();

    let bindings = services.by_implementation::<SilentImplementation>();
    assert_eq!(bindings.len(), 1);
    assert!(bindings[0].service_type.is::<dyn TestB>());
    assert_eq!(bindings[0].lifetime, Lifetime::Singleton);
}

#[test]
fn test_unmarked_derived_type_not_registered() {
    let services = services_from_global();

    assert!(services.by_implementation::<UnmarkedBase>().is_empty());
}

#[test]
fn test_should_register_from_process_wide_catalog() {
    let mut services = ServiceCollection::new();
    services.add_auto_services().unwrap();

    assert_eq!(services, services_from_global());
}

#[test]
fn test_global_catalog_contains_every_derived_type() {
    let catalog = TypeCatalog::from_global();

    assert!(catalog.contains(&TypeHandle::of::<SingleImplementation>()));
    assert!(catalog.contains(&TypeHandle::of::<UnmarkedBase>()));
    assert_eq!(catalog.len(), 12);
}

#[test]
fn test_report_from_global_catalog() {
    let mut services = ServiceCollection::new();

    let report = services.add_auto_services().unwrap();

    assert_eq!(report.types_scanned, 12);
    assert_eq!(report.types_registered, 11);
    assert_eq!(report.bindings_added, services.len());
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["types_registered"], 11);
}
