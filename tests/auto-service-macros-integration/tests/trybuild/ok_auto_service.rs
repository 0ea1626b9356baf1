use auto_service_macros::AutoService;
use di_abstractions::{AutoServiceType, Lifetime};
use di_impl::{AutoServiceCollectionExt, ServiceCollection};

trait Greeter {}

#[derive(AutoService)]
#[implements(dyn Greeter)]
#[auto_service(singleton, all_interfaces)]
struct ConsoleGreeter;

impl Greeter for ConsoleGreeter {}

fn main() {
    assert_eq!(ConsoleGreeter::auto_services().len(), 1);

    let mut services = ServiceCollection::new();
    services.add_auto_services().unwrap();

    let binding = services.get_of::<dyn Greeter>().unwrap();
    assert!(binding.implementation_type.is::<ConsoleGreeter>());
    assert_eq!(binding.lifetime, Lifetime::Singleton);
}
