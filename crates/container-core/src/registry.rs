//! bean 实例注册表
//!
//! 一个按索引寻址的插槽数组加名称索引。构建器按定义处理顺序
//! 依次压入插槽，"只能看到更早条目"由此成为结构性质而非
//! 映射迭代顺序的偶然结果。构建完成后不暴露任何变更路径。

use container_common::{
    BeanCreationError, BeanCreationResult, BeanTypeDescriptor, BoxedView, SharedBean,
};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 一个已构建完成的 bean 插槽
pub struct BeanSlot {
    /// bean id
    pub id: String,
    /// 实例的类型记录
    pub descriptor: Arc<BeanTypeDescriptor>,
    /// 实例本体
    pub instance: SharedBean,
}

impl fmt::Debug for BeanSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanSlot")
            .field("id", &self.id)
            .field("type_path", &self.descriptor.type_path)
            .finish()
    }
}

/// 插入有序的 bean 注册表
///
/// 由一个上下文独占持有；插入顺序等于定义处理顺序；
/// 一个 id 一经插入就不再被移除或替换。
#[derive(Debug, Default)]
pub struct BeanRegistry {
    slots: Vec<BeanSlot>,
    index: HashMap<String, usize>,
}

impl BeanRegistry {
    /// 创建空注册表
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 压入一个新插槽
    ///
    /// 重复的 id 违反注册表不变量，中止构建。
    pub(crate) fn insert(
        &mut self,
        id: String,
        descriptor: Arc<BeanTypeDescriptor>,
        instance: SharedBean,
    ) -> BeanCreationResult<()> {
        if self.index.contains_key(&id) {
            return Err(BeanCreationError::DuplicateId { bean_id: id });
        }
        self.index.insert(id.clone(), self.slots.len());
        self.slots.push(BeanSlot {
            id,
            descriptor,
            instance,
        });
        Ok(())
    }

    /// 已注册的 bean 数量
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 是否存在给定 id 的 bean
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// 按 id 取插槽
    pub fn get(&self, id: &str) -> Option<&BeanSlot> {
        self.index.get(id).map(|&position| &self.slots[position])
    }

    /// 插入顺序的全部插槽
    pub fn slots(&self) -> &[BeanSlot] {
        &self.slots
    }

    /// 按类型可赋值性解析一个依赖
    ///
    /// 按插入顺序扫描，返回第一个能借出 `target` 视图的 bean 的视图；
    /// 多个候选时最早插入者胜出，不做名称消歧。
    pub fn resolve_assignable(&self, target: TypeId) -> Option<BoxedView> {
        self.slots
            .iter()
            .find_map(|slot| slot.descriptor.provide(target, &slot.instance))
    }
}
