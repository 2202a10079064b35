//! 构造参数字面量转换
//!
//! 仅用于声明式定义的构造参数字面量；属性字面量不经过这里。

use container_common::{ArgValue, CoercionError, PrimitiveType};

/// 按类型标签把字面量文本转换为参数值
///
/// 未标注标签的字面量按原样以字符串传递。boolean 转换永不失败：
/// `"true"`（忽略大小写）为真，其余文本一律为假。
pub fn coerce_literal(
    value: &str,
    coerce_as: Option<PrimitiveType>,
) -> Result<ArgValue, CoercionError> {
    match coerce_as {
        None => Ok(ArgValue::Str(value.to_string())),
        Some(PrimitiveType::Int) => value
            .parse::<i32>()
            .map(ArgValue::Int)
            .map_err(|_| CoercionError::Int {
                value: value.to_string(),
            }),
        Some(PrimitiveType::Long) => value
            .parse::<i64>()
            .map(ArgValue::Long)
            .map_err(|_| CoercionError::Long {
                value: value.to_string(),
            }),
        Some(PrimitiveType::Double) => value
            .parse::<f64>()
            .map(ArgValue::Double)
            .map_err(|_| CoercionError::Double {
                value: value.to_string(),
            }),
        Some(PrimitiveType::Boolean) => Ok(ArgValue::Bool(value.eq_ignore_ascii_case("true"))),
    }
}
