//! 文档加载与定义转换

use crate::document::{ArgEntry, BeanEntry, BeansDocument, PropertyEntry};
use container_common::{
    BeanDefinition, ConfigError, ConfigResult, ConstructorArg, PrimitiveType, PropertySpec,
    PropertyValue,
};
use std::path::Path;
use tracing::debug;

/// 加载 bean 文档并转换为定义序列
///
/// 返回序列的顺序等于文档顺序。文件缺失、不可读或格式错误
/// 分别映射为 [`ConfigError`] 的对应变体。
pub fn load_bean_definitions<P: AsRef<Path>>(path: P) -> ConfigResult<Vec<BeanDefinition>> {
    let path = path.as_ref();
    debug!("加载 bean 文档: {}", path.display());

    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError { source: e })?;

    definitions_from_str(&content)
}

/// 从文档文本转换定义序列
pub fn definitions_from_str(content: &str) -> ConfigResult<Vec<BeanDefinition>> {
    let document: BeansDocument = serde_yaml::from_str(content).map_err(|e| {
        ConfigError::ParseError {
            source: Box::new(e),
        }
    })?;

    let definitions = document
        .beans
        .into_iter()
        .map(convert_entry)
        .collect::<ConfigResult<Vec<_>>>()?;

    debug!("bean 文档加载完成, 共 {} 个定义", definitions.len());
    Ok(definitions)
}

fn convert_entry(entry: BeanEntry) -> ConfigResult<BeanDefinition> {
    let BeanEntry {
        id,
        class,
        constructor_args,
        properties,
    } = entry;

    let constructor_args = constructor_args
        .into_iter()
        .enumerate()
        .map(|(position, arg)| convert_arg(&id, position, arg))
        .collect::<ConfigResult<Vec<_>>>()?;

    let properties = properties
        .into_iter()
        .map(|property| convert_property(&id, property))
        .collect::<ConfigResult<Vec<_>>>()?;

    Ok(BeanDefinition {
        id,
        type_path: class,
        constructor_args,
        properties,
    })
}

fn convert_arg(bean_id: &str, position: usize, arg: ArgEntry) -> ConfigResult<ConstructorArg> {
    // ref 优先于 value
    if let Some(reference) = arg.reference {
        return Ok(ConstructorArg::Ref { bean_id: reference });
    }
    if let Some(value) = arg.value {
        let coerce_as = arg.type_tag.as_deref().and_then(PrimitiveType::from_tag);
        return Ok(ConstructorArg::Literal { value, coerce_as });
    }
    Err(ConfigError::ValidationError {
        message: format!(
            "bean {} 的第 {} 个构造参数缺少 ref 或 value",
            bean_id,
            position + 1
        ),
    })
}

fn convert_property(bean_id: &str, property: PropertyEntry) -> ConfigResult<PropertySpec> {
    let PropertyEntry {
        name,
        reference,
        value,
    } = property;

    let value = if let Some(reference) = reference {
        PropertyValue::Ref(reference)
    } else if let Some(value) = value {
        PropertyValue::Literal(value)
    } else {
        return Err(ConfigError::ValidationError {
            message: format!("bean {} 的属性 {} 缺少 ref 或 value", bean_id, name),
        });
    };

    Ok(PropertySpec { name, value })
}
