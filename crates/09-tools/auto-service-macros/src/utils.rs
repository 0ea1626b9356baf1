//! 宏工具函数

use proc_macro2::Span;
use syn::Ident;

/// 生成类型登记函数名
///
/// 直接拼接原始类型名，大小写不同的类型不会冲突。
pub fn registration_fn_ident(type_name: &Ident) -> Ident {
    Ident::new(
        &format!("__register_auto_service_{}", type_name),
        Span::call_site(),
    )
}
