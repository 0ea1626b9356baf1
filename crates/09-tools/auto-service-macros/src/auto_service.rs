//! 自动服务派生宏实现

use crate::utils::registration_fn_ident;
use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{
    parse::Parse, parse::ParseStream, punctuated::Punctuated, Attribute, DeriveInput, Expr, Lit,
    Meta, Result, Token, Type,
};

/// 标记生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLifetime {
    Singleton,
    Scoped,
    Transient,
}

/// 自身注册策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSelfRegistration {
    Always,
    WhenNoOther,
    Never,
}

/// 单个 `#[auto_service(...)]` 属性的参数
#[derive(Default)]
pub struct MarkerArgs {
    /// 未指定时沿用标记的默认生命周期
    pub lifetime: Option<MarkerLifetime>,
    pub services: Vec<Type>,
    pub all_interfaces: bool,
    pub self_registration: Option<MarkerSelfRegistration>,
}

impl MarkerArgs {
    fn set_lifetime(&mut self, meta: &syn::Path, lifetime: MarkerLifetime) -> Result<()> {
        if self.lifetime.is_some() {
            return Err(syn::Error::new_spanned(meta, "生命周期只能指定一次"));
        }
        self.lifetime = Some(lifetime);
        Ok(())
    }
}

impl Parse for MarkerArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = MarkerArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("singleton") {
                        args.set_lifetime(&path, MarkerLifetime::Singleton)?;
                    } else if path.is_ident("scoped") {
                        args.set_lifetime(&path, MarkerLifetime::Scoped)?;
                    } else if path.is_ident("transient") {
                        args.set_lifetime(&path, MarkerLifetime::Transient)?;
                    } else if path.is_ident("all_interfaces") {
                        args.all_interfaces = true;
                    } else {
                        return Err(syn::Error::new_spanned(path, "未知的 auto_service 参数"));
                    }
                }
                Meta::List(list) if list.path.is_ident("services") => {
                    let types =
                        list.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
                    args.services.extend(types);
                }
                Meta::NameValue(nv) if nv.path.is_ident("self_registration") => {
                    let value = match &nv.value {
                        Expr::Lit(expr_lit) => match &expr_lit.lit {
                            Lit::Str(lit_str) => lit_str.value(),
                            _ => String::new(),
                        },
                        _ => String::new(),
                    };
                    args.self_registration = Some(match value.as_str() {
                        "always" => MarkerSelfRegistration::Always,
                        "when_no_other" => MarkerSelfRegistration::WhenNoOther,
                        "never" => MarkerSelfRegistration::Never,
                        _ => {
                            return Err(syn::Error::new_spanned(
                                &nv.value,
                                "self_registration 只能是 \"always\"、\"when_no_other\" 或 \"never\"",
                            ))
                        }
                    });
                }
                other => {
                    return Err(syn::Error::new_spanned(other, "未知的 auto_service 参数"));
                }
            }
        }

        Ok(args)
    }
}

/// 从派生输入收集到的类型信息
#[derive(Default)]
pub struct AutoServiceInput {
    pub markers: Vec<MarkerArgs>,
    pub interfaces: Vec<Type>,
    pub bases: Vec<Type>,
    pub is_abstract: bool,
}

impl AutoServiceInput {
    /// 按源码顺序读取辅助属性
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self> {
        let mut input = AutoServiceInput::default();

        for attr in attrs {
            let path = attr.path();
            if path.is_ident("auto_service") {
                let marker = match &attr.meta {
                    Meta::Path(_) => MarkerArgs::default(),
                    _ => attr.parse_args::<MarkerArgs>()?,
                };
                input.markers.push(marker);
            } else if path.is_ident("implements") {
                input.interfaces.extend(parse_type_list(attr)?);
            } else if path.is_ident("extends") {
                input.bases.extend(parse_type_list(attr)?);
            } else if path.is_ident("abstract_type") {
                attr.meta.require_path_only()?;
                input.is_abstract = true;
            }
        }

        Ok(input)
    }
}

fn parse_type_list(attr: &Attribute) -> Result<Punctuated<Type, Token![,]>> {
    attr.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)
}

/// 生成单个标记的构造表达式
fn marker_tokens(marker: &MarkerArgs) -> proc_macro2::TokenStream {
    let lifetime = marker.lifetime.map(|lifetime| {
        let variant = match lifetime {
            MarkerLifetime::Singleton => quote! { Singleton },
            MarkerLifetime::Scoped => quote! { Scoped },
            MarkerLifetime::Transient => quote! { Transient },
        };
        quote! { .with_lifetime(::di_abstractions::Lifetime::#variant) }
    });

    let services = marker
        .services
        .iter()
        .map(|service| quote! { .service::<#service>() });

    let all_interfaces = marker.all_interfaces.then(|| quote! { .all_interfaces() });

    let self_registration = marker.self_registration.map(|policy| {
        let variant = match policy {
            MarkerSelfRegistration::Always => quote! { Always },
            MarkerSelfRegistration::WhenNoOther => quote! { WhenNoOtherServiceType },
            MarkerSelfRegistration::Never => quote! { Never },
        };
        quote! { .self_registration(::di_abstractions::SelfRegistration::#variant) }
    });

    quote! {
        ::di_abstractions::AutoService::new()
            #lifetime
            #(#services)*
            #all_interfaces
            #self_registration
    }
}

/// 实现 #[derive(AutoService)] 宏
pub fn derive_auto_service_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoService 不支持泛型类型",
        ));
    }

    let type_name = &input.ident;
    let parsed = AutoServiceInput::from_attributes(&input.attrs)?;

    let interfaces = &parsed.interfaces;
    let bases = &parsed.bases;
    let abstract_type = parsed.is_abstract.then(|| quote! { .abstract_type() });
    let markers = parsed.markers.iter().map(marker_tokens);

    let registration_fn = registration_fn_ident(type_name);

    // 声明的接口必须真实实现：`&T` 到 `&dyn Trait` 的转换在编译期检查
    let interface_checks = interfaces.iter().map(|interface| {
        quote_spanned! {interface.span()=>
            const _: () = {
                #[allow(dead_code)]
                fn __assert_implements(value: &#type_name) -> &(#interface) {
                    value
                }
            };
        }
    });

    Ok(quote! {
        impl ::di_abstractions::AutoServiceType for #type_name {
            fn type_descriptor() -> ::di_abstractions::TypeDescriptor {
                ::di_abstractions::TypeDescriptor::of::<Self>()
                    #(.implements::<#interfaces>())*
                    #(.extends_descriptor(
                        &<#bases as ::di_abstractions::AutoServiceType>::type_descriptor()
                    ))*
                    #abstract_type
            }

            fn auto_services() -> ::std::vec::Vec<::di_abstractions::AutoService> {
                ::std::vec![#(#markers),*]
            }
        }

        #(#interface_checks)*

        // 程序启动时登记到进程级类型表
        #[allow(non_snake_case)]
        #[::di_abstractions::__private::ctor::ctor]
        fn #registration_fn() {
            ::di_abstractions::register_global::<#type_name>();
        }
    })
}
