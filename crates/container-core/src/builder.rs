//! bean 图构建器
//!
//! 消费一个有序的定义序列，对每个定义依次执行：解析目标类型、
//! 实例化（构造参数注入或零参构造）、字段注入、设值注入、入册。
//! 构建器只依赖公共定义形状，不关心定义来自哪个来源。

use crate::coerce::coerce_literal;
use crate::registry::BeanRegistry;
use container_common::{
    lookup_descriptor, ArgValue, BeanArgs, BeanCreationError, BeanCreationResult, BeanDefinition,
    BeanInstance, BeanTypeDescriptor, ConstructorArg, InjectionPoint, ResolvedRef,
    TypeResolutionError,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 单遍有序图构建
pub struct BeanGraphBuilder;

impl BeanGraphBuilder {
    /// 按接收顺序处理定义序列，产出填充完成的注册表
    ///
    /// 任一定义失败都会中止整个构建；不存在按 bean 跳过继续的路径。
    pub fn build(definitions: Vec<BeanDefinition>) -> BeanCreationResult<BeanRegistry> {
        info!("开始构建 bean 图, 共 {} 个定义", definitions.len());

        let mut registry = BeanRegistry::new();
        for definition in definitions {
            Self::build_one(&mut registry, definition)?;
        }

        info!("bean 图构建完成, 共注册 {} 个 bean", registry.len());
        Ok(registry)
    }

    fn build_one(
        registry: &mut BeanRegistry,
        definition: BeanDefinition,
    ) -> BeanCreationResult<()> {
        let BeanDefinition {
            id,
            type_path,
            constructor_args,
            // 属性说明被解析保留，但当前注入策略不消费
            properties: _,
        } = definition;

        // 1. 解析目标类型
        let descriptor =
            lookup_descriptor(&type_path).ok_or_else(|| BeanCreationError::TypeResolution {
                bean_id: id.clone(),
                source: TypeResolutionError {
                    type_path: type_path.clone(),
                },
            })?;

        // 2. 实例化
        let mut instance = if constructor_args.is_empty() {
            Self::instantiate_default(&id, &descriptor)?
        } else {
            Self::instantiate_with_args(registry, &id, &descriptor, constructor_args)?
        };

        // 3. 字段注入
        Self::inject_members(registry, &id, &descriptor.fields, &mut instance);

        // 4. 设值注入
        Self::inject_members(registry, &id, &descriptor.setters, &mut instance);

        // 5. 入册
        debug!("注册 bean: {} ({})", id, descriptor.type_path);
        registry.insert(id, descriptor, Arc::from(instance))
    }

    fn instantiate_default(
        bean_id: &str,
        descriptor: &BeanTypeDescriptor,
    ) -> BeanCreationResult<BeanInstance> {
        let construct = descriptor.construct_default.ok_or_else(|| {
            BeanCreationError::NoDefaultConstructor {
                bean_id: bean_id.to_string(),
                type_path: descriptor.type_path.to_string(),
            }
        })?;
        Ok(construct())
    }

    fn instantiate_with_args(
        registry: &BeanRegistry,
        bean_id: &str,
        descriptor: &BeanTypeDescriptor,
        constructor_args: Vec<ConstructorArg>,
    ) -> BeanCreationResult<BeanInstance> {
        let constructor =
            descriptor
                .construct_args
                .ok_or_else(|| BeanCreationError::NoArgConstructor {
                    bean_id: bean_id.to_string(),
                    type_path: descriptor.type_path.to_string(),
                })?;

        if constructor_args.len() != constructor.arity {
            return Err(BeanCreationError::ArityMismatch {
                bean_id: bean_id.to_string(),
                expected: constructor.arity,
                actual: constructor_args.len(),
            });
        }

        let values = constructor_args
            .into_iter()
            .map(|arg| Self::resolve_arg(registry, bean_id, arg))
            .collect::<BeanCreationResult<Vec<_>>>()?;

        (constructor.build)(BeanArgs::new(values)).map_err(|e| {
            BeanCreationError::ConstructorFailed {
                bean_id: bean_id.to_string(),
                source: Box::new(e),
            }
        })
    }

    /// 解析一个构造参数
    ///
    /// ref 参数只在已入册的 bean 中查找；未命中时以空参数传入，
    /// 而不是报错。字面量按标签转换。
    fn resolve_arg(
        registry: &BeanRegistry,
        bean_id: &str,
        arg: ConstructorArg,
    ) -> BeanCreationResult<ArgValue> {
        match arg {
            ConstructorArg::Ref { bean_id: target } => {
                let resolved = registry.get(&target).map(|slot| ResolvedRef {
                    instance: slot.instance.clone(),
                    descriptor: slot.descriptor.clone(),
                });
                if resolved.is_none() {
                    debug!(
                        "bean {} 引用的 {} 尚未注册, 以空参数传入",
                        bean_id, target
                    );
                }
                Ok(ArgValue::Bean(resolved))
            }
            ConstructorArg::Literal { value, coerce_as } => coerce_literal(&value, coerce_as)
                .map_err(|e| BeanCreationError::Coercion {
                    bean_id: bean_id.to_string(),
                    source: e,
                }),
        }
    }

    /// 对一组注入点逐个解析并应用依赖
    ///
    /// 按插入顺序取第一个可赋值的已入册 bean；没有候选时静默跳过。
    fn inject_members(
        registry: &BeanRegistry,
        bean_id: &str,
        points: &[InjectionPoint],
        instance: &mut BeanInstance,
    ) {
        for point in points {
            match registry.resolve_assignable(point.target) {
                Some(view) => {
                    if (point.apply)(instance.as_mut(), view) {
                        debug!(
                            "注入 {}.{} <- 第一个可赋值为 {} 的 bean",
                            bean_id, point.member, point.target_name
                        );
                    } else {
                        warn!("注入点 {}.{} 应用失败", bean_id, point.member);
                    }
                }
                None => {
                    debug!(
                        "{}.{} 没有可赋值为 {} 的 bean, 跳过注入",
                        bean_id, point.member, point.target_name
                    );
                }
            }
        }
    }
}
