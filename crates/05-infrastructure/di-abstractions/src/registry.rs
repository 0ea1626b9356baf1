//! 服务注册表抽象接口

use crate::resolver::Binding;

/// 服务注册表 trait
///
/// 接收解析得到的绑定并按追加顺序保存，不做去重。
pub trait ServiceRegistry {
    /// 追加一条绑定
    fn add(&mut self, binding: Binding);

    /// 按顺序追加多条绑定
    fn add_all(&mut self, bindings: Vec<Binding>) {
        for binding in bindings {
            self.add(binding);
        }
    }

    /// 已注册的全部绑定
    fn bindings(&self) -> &[Binding];
}
