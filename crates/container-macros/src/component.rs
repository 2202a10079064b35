//! 组件注册宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Expr, Fields,
    Ident, ItemStruct, Lit, Meta, Result, Token,
};

use crate::utils::extract_option_inner;

/// 组件配置参数
#[derive(Default)]
struct ComponentArgs {
    /// 显式组件名
    name: Option<String>,
    /// 可赋值为的 trait 视图
    provides: Vec<syn::Path>,
    /// 是否注册位置参数构造方式
    constructor: bool,
    /// 是否抑制零参构造方式
    no_default: bool,
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = Self::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("constructor") {
                        args.constructor = true;
                    } else if path.is_ident("no_default") {
                        args.no_default = true;
                    } else {
                        return Err(syn::Error::new_spanned(path, "未知的 component 参数"));
                    }
                }
                Meta::NameValue(nv) => {
                    if !nv.path.is_ident("name") {
                        return Err(syn::Error::new_spanned(nv.path, "未知的 component 参数"));
                    }
                    if let Expr::Lit(expr_lit) = &nv.value {
                        if let Lit::Str(lit_str) = &expr_lit.lit {
                            args.name = Some(lit_str.value());
                            continue;
                        }
                    }
                    return Err(syn::Error::new_spanned(nv.value, "name 需要字符串字面量"));
                }
                Meta::List(list) => {
                    if !list.path.is_ident("provides") {
                        return Err(syn::Error::new_spanned(list.path, "未知的 component 参数"));
                    }
                    let paths = list
                        .parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)?;
                    args.provides.extend(paths);
                }
            }
        }

        Ok(args)
    }
}

/// 注入点种类
enum InjectKind {
    Field,
    Setter,
}

/// 从字段标注收集到的注入点
struct InjectPoint {
    ident: Ident,
    inner: syn::Type,
    kind: InjectKind,
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let component_args = if args.is_empty() {
        ComponentArgs::default()
    } else {
        match syn::parse::<ComponentArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let mut input_struct = parse_macro_input!(input as ItemStruct);

    if !input_struct.generics.params.is_empty() {
        return syn::Error::new_spanned(&input_struct.generics, "组件类型不支持泛型参数")
            .to_compile_error()
            .into();
    }

    let points = match collect_injection_points(&mut input_struct) {
        Ok(points) => points,
        Err(e) => return e.to_compile_error().into(),
    };

    let struct_name = input_struct.ident.clone();
    let struct_name_string = struct_name.to_string();
    let component_name = component_args
        .name
        .clone()
        .unwrap_or_else(|| struct_name_string.clone());

    // 生成 Component trait 实现
    let component_trait_impl = quote! {
        impl container_common::Component for #struct_name {
            fn name(&self) -> &'static str {
                #component_name
            }
        }
    };

    // 生成自动注册代码
    let registration_code =
        generate_registration_code(&struct_name, &component_name, &component_args, &points);

    let expanded = quote! {
        #input_struct

        #component_trait_impl

        #registration_code
    };

    TokenStream::from(expanded)
}

/// 收集并剥离字段上的 #[autowired] 标注
fn collect_injection_points(input_struct: &mut ItemStruct) -> Result<Vec<InjectPoint>> {
    let Fields::Named(fields) = &mut input_struct.fields else {
        // 没有命名字段就没有注入点
        for field in input_struct.fields.iter() {
            if field.attrs.iter().any(|a| a.path().is_ident("autowired")) {
                return Err(syn::Error::new_spanned(field, "autowired 需要命名字段"));
            }
        }
        return Ok(Vec::new());
    };

    let mut points = Vec::new();

    for field in &mut fields.named {
        let mut kind = None;
        let mut attr_error = None;

        field.attrs.retain(|attr| {
            if !attr.path().is_ident("autowired") {
                return true;
            }
            match &attr.meta {
                Meta::Path(_) => kind = Some(InjectKind::Field),
                Meta::List(list) => match list.parse_args::<Ident>() {
                    Ok(ident) if ident == "setter" => kind = Some(InjectKind::Setter),
                    _ => {
                        attr_error = Some(syn::Error::new_spanned(
                            list,
                            "autowired 仅支持 setter 参数",
                        ));
                    }
                },
                Meta::NameValue(nv) => {
                    attr_error = Some(syn::Error::new_spanned(nv, "autowired 不接受键值参数"));
                }
            }
            false
        });

        if let Some(error) = attr_error {
            return Err(error);
        }

        let Some(kind) = kind else {
            continue;
        };

        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let Some(inner) = extract_option_inner(&field.ty).cloned() else {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "autowired 字段必须是 Option<..> 类型",
            ));
        };

        points.push(InjectPoint { ident, inner, kind });
    }

    Ok(points)
}

/// 生成组件自动注册代码
fn generate_registration_code(
    struct_name: &Ident,
    component_name: &str,
    args: &ComponentArgs,
    points: &[InjectPoint],
) -> proc_macro2::TokenStream {
    let registration_fn_name = Ident::new(
        &format!(
            "__register_component_{}",
            struct_name.to_string().to_lowercase()
        ),
        Span::call_site(),
    );
    let short_name = struct_name.to_string();

    let construct_default = if args.no_default {
        quote! { None }
    } else {
        quote! {
            Some(|| Box::new(<#struct_name as Default>::default())
                as container_common::BeanInstance)
        }
    };

    let construct_args = if args.constructor {
        quote! {
            Some(container_common::ArgConstructor {
                arity: <#struct_name as container_common::FromBeanArgs>::ARITY,
                build: |args| {
                    <#struct_name as container_common::FromBeanArgs>::from_bean_args(args)
                        .map(|component| Box::new(component) as container_common::BeanInstance)
                },
            })
        }
    } else {
        quote! { None }
    };

    let mut field_points = Vec::new();
    let mut setter_points = Vec::new();
    for point in points {
        let member = point.ident.to_string();
        let inner = &point.inner;
        match point.kind {
            InjectKind::Field => {
                let field_ident = &point.ident;
                field_points.push(quote! {
                    container_common::InjectionPoint {
                        member: #member,
                        kind: container_common::InjectionKind::Field,
                        target: std::any::TypeId::of::<#inner>(),
                        target_name: std::any::type_name::<#inner>(),
                        apply: |instance: &mut dyn std::any::Any,
                                view: container_common::BoxedView| {
                            let Some(this) = instance.downcast_mut::<#struct_name>() else {
                                return false;
                            };
                            let Ok(dep) = view.downcast::<#inner>() else {
                                return false;
                            };
                            this.#field_ident = Some(*dep);
                            true
                        },
                    }
                });
            }
            InjectKind::Setter => {
                let setter_ident =
                    Ident::new(&format!("set_{}", point.ident), point.ident.span());
                setter_points.push(quote! {
                    container_common::InjectionPoint {
                        member: #member,
                        kind: container_common::InjectionKind::Setter,
                        target: std::any::TypeId::of::<#inner>(),
                        target_name: std::any::type_name::<#inner>(),
                        apply: |instance: &mut dyn std::any::Any,
                                view: container_common::BoxedView| {
                            let Some(this) = instance.downcast_mut::<#struct_name>() else {
                                return false;
                            };
                            let Ok(dep) = view.downcast::<#inner>() else {
                                return false;
                            };
                            this.#setter_ident(*dep);
                            true
                        },
                    }
                });
            }
        }
    }

    let trait_views = args.provides.iter().map(|path| {
        quote! {
            container_common::ProvidedView {
                target: std::any::TypeId::of::<std::sync::Arc<dyn #path>>(),
                target_name: std::any::type_name::<std::sync::Arc<dyn #path>>(),
                cast: |shared: &container_common::SharedBean| {
                    shared
                        .clone()
                        .downcast::<#struct_name>()
                        .ok()
                        .map(|arc| Box::new(arc as std::sync::Arc<dyn #path>)
                            as container_common::BoxedView)
                },
            }
        }
    });

    quote! {
        // 使用 ctor 在程序启动时自动注册组件类型
        #[ctor::ctor]
        fn #registration_fn_name() {
            let construct_default: Option<fn() -> container_common::BeanInstance> =
                #construct_default;
            let construct_args: Option<container_common::ArgConstructor> = #construct_args;

            container_common::register_descriptor(container_common::BeanTypeDescriptor {
                type_path: concat!(module_path!(), "::", #short_name),
                module_path: module_path!(),
                short_name: #short_name,
                component_name: #component_name,
                type_id: std::any::TypeId::of::<#struct_name>(),
                construct_default,
                construct_args,
                fields: vec![#(#field_points),*],
                setters: vec![#(#setter_points),*],
                provides: vec![
                    container_common::ProvidedView::of::<#struct_name>()
                    #(, #trait_views)*
                ],
            });
        }
    }
}
