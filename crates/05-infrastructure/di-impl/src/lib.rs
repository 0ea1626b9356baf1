//! # 依赖注入具体实现
//!
//! 提供注册解析器、服务集合、类型目录和自动注册器的具体实现
//!
//! ```rust
//! use di_abstractions::{AutoService, MarkedType, TypeDescriptor};
//! use di_impl::{AutoServiceCollectionExt, ServiceCollection, TypeCatalog};
//!
//! trait Clock {}
//! struct SystemClock;
//! impl Clock for SystemClock {}
//!
//! let catalog = TypeCatalog::new("app").add_marked(MarkedType::new(
//!     TypeDescriptor::of::<SystemClock>().implements::<dyn Clock>(),
//!     vec![AutoService::new().singleton().all_interfaces()],
//! ));
//!
//! let mut services = ServiceCollection::new();
//! services.add_auto_services_from(&catalog).unwrap();
//! assert!(services.contains_of::<dyn Clock>());
//! ```

pub mod catalog;
pub mod collection;
pub mod extensions;
pub mod registrar;
pub mod resolver;

pub use catalog::{TypeCatalog, GLOBAL_CATALOG_NAME};
pub use collection::ServiceCollection;
pub use extensions::AutoServiceCollectionExt;
pub use registrar::{AutoServiceRegistrar, BindingRecord, RegistrationReport};
pub use resolver::DefaultRegistrationResolver;
