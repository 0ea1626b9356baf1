//! 默认注册解析器

use di_abstractions::{AutoService, Binding, RegistrationResolver, SelfRegistration};
use infrastructure_common::{RegistrationError, RegistrationResult, TypeCapabilities};
use tracing::{debug, error};

/// 默认注册解析器
///
/// 每个标记依次执行三步：全部接口、显式服务类型、自身注册策略；
/// 各标记的结果按声明顺序拼接，不做去重。
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRegistrationResolver;

impl DefaultRegistrationResolver {
    /// 创建新的解析器
    pub fn new() -> Self {
        Self
    }

    fn resolve_marker(
        &self,
        implementation: &dyn TypeCapabilities,
        marker: &AutoService,
        bindings: &mut Vec<Binding>,
    ) -> RegistrationResult<()> {
        let implementation_type = implementation.type_handle();
        let lifetime = marker.lifetime();
        let produced_before = bindings.len();
        let mut self_bound_by_fallback = false;

        if marker.registers_all_interfaces() {
            let interfaces = implementation.implemented_interfaces();
            if interfaces.is_empty() {
                // 没有任何接口时退化为自身注册
                bindings.push(Binding::new(implementation_type, implementation_type, lifetime));
                self_bound_by_fallback = true;
            } else {
                bindings.extend(
                    interfaces
                        .iter()
                        .map(|interface| Binding::new(*interface, implementation_type, lifetime)),
                );
            }
        }

        if !marker.service_types().is_empty() {
            if implementation.is_abstract() {
                return Err(RegistrationError::abstract_implementation(implementation_type));
            }
            for service_type in marker.service_types() {
                if !implementation.is_assignable_to(service_type) {
                    return Err(RegistrationError::service_type_mismatch(
                        *service_type,
                        implementation_type,
                    ));
                }
                bindings.push(Binding::new(*service_type, implementation_type, lifetime));
            }
        }

        let add_self = match marker.self_registration_policy() {
            SelfRegistration::Always => !self_bound_by_fallback,
            SelfRegistration::WhenNoOtherServiceType => bindings.len() == produced_before,
            SelfRegistration::Never => false,
        };
        if add_self {
            bindings.push(Binding::new(implementation_type, implementation_type, lifetime));
        }

        Ok(())
    }
}

impl RegistrationResolver for DefaultRegistrationResolver {
    fn resolve(
        &self,
        implementation: &dyn TypeCapabilities,
        markers: &[AutoService],
    ) -> RegistrationResult<Vec<Binding>> {
        let mut bindings = Vec::new();

        for marker in markers {
            if let Err(e) = self.resolve_marker(implementation, marker, &mut bindings) {
                error!("解析服务注册失败: {}", e);
                return Err(e);
            }
        }

        for binding in &bindings {
            debug!("解析服务绑定: {}", binding);
        }
        Ok(bindings)
    }
}
