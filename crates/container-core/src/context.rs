//! 应用上下文门面
//!
//! 一个上下文独占持有一个注册表。全部图构建在构造函数内同步
//! 完成；构造返回后上下文只读，可安全地被多个调用方并发查找。

use crate::builder::BeanGraphBuilder;
use crate::discovery::discover_components;
use crate::registry::BeanRegistry;
use container_common::{BeanDefinition, ContextResult, LookupError, LookupResult};
use container_config::load_bean_definitions;
use std::any::{Any, TypeId};
use std::path::Path;

/// 构建完成的应用上下文
#[derive(Debug)]
pub struct ApplicationContext {
    registry: BeanRegistry,
}

impl ApplicationContext {
    /// 声明式模式：从 bean 文档构建上下文
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> ContextResult<Self> {
        let definitions = load_bean_definitions(path)?;
        Self::from_definitions(definitions)
    }

    /// 扫描模式：从包内带标记的组件构建上下文
    ///
    /// 两种模式互斥，在构造时选定，一个上下文内不可混用。
    pub fn from_package(base_package: &str) -> ContextResult<Self> {
        Self::from_definitions(discover_components(base_package))
    }

    /// 从已就绪的定义序列构建上下文
    pub fn from_definitions(definitions: Vec<BeanDefinition>) -> ContextResult<Self> {
        Ok(Self {
            registry: BeanGraphBuilder::build(definitions)?,
        })
    }

    /// 按名称查找 bean, 借出为视图 `V`（`Arc<T>` 或 `Arc<dyn Trait>`）
    pub fn get_bean<V: Any>(&self, name: &str) -> LookupResult<V> {
        let slot = self
            .registry
            .get(name)
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })?;

        let mismatch = || LookupError::TypeMismatch {
            name: name.to_string(),
            type_path: slot.descriptor.type_path.to_string(),
            requested: std::any::type_name::<V>(),
        };

        let view = slot
            .descriptor
            .provide(TypeId::of::<V>(), &slot.instance)
            .ok_or_else(|| mismatch())?;
        let view = view.downcast::<V>().map_err(|_| mismatch())?;
        Ok(*view)
    }

    /// 按类型查找 bean
    ///
    /// 按插入顺序扫描注册表，返回第一个可借出视图 `V` 的 bean；
    /// 多个命中时第一个静默胜出，与注入的解析策略一致。
    pub fn get_bean_by_type<V: Any>(&self) -> LookupResult<V> {
        self.registry
            .resolve_assignable(TypeId::of::<V>())
            .and_then(|view| view.downcast::<V>().ok())
            .map(|view| *view)
            .ok_or(LookupError::TypeNotFound {
                requested: std::any::type_name::<V>(),
            })
    }

    /// 已注册的 bean 数量
    pub fn bean_count(&self) -> usize {
        self.registry.len()
    }

    /// 是否存在给定 id 的 bean
    pub fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// 只读访问底层注册表
    pub fn registry(&self) -> &BeanRegistry {
        &self.registry
    }
}
