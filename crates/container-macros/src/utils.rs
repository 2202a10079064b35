//! 宏实现的类型工具

use syn::{GenericArgument, PathArguments, Type};

/// 提取 `Option<V>` 的内层类型 `V`
///
/// 注入点的声明类型必须包在 `Option` 里（缺席依赖的零值即 `None`）。
pub fn extract_option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    if arguments.args.len() != 1 {
        return None;
    }
    match arguments.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
