//! 全局类型能力目录
//!
//! 进程级的 `类型路径 → 能力记录` 映射，由 `#[component]` 宏生成的
//! 注册函数在程序启动时填充，之后只读。
//!
//! 目录的迭代顺序是未定义的（底层是 HashMap）——组件扫描来源
//! 因此不提供任何顺序保证。

use crate::descriptor::BeanTypeDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 全局类型目录
static TYPE_CATALOG: Lazy<RwLock<HashMap<&'static str, Arc<BeanTypeDescriptor>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 注册一条组件类型记录
///
/// 由宏生成的启动注册函数调用；同一类型路径重复注册时后者生效。
pub fn register_descriptor(descriptor: BeanTypeDescriptor) {
    debug!("注册组件类型: {}", descriptor.type_path);
    let mut catalog = TYPE_CATALOG.write();
    catalog.insert(descriptor.type_path, Arc::new(descriptor));
}

/// 按类型路径解析组件类型记录
pub fn lookup_descriptor(type_path: &str) -> Option<Arc<BeanTypeDescriptor>> {
    let catalog = TYPE_CATALOG.read();
    catalog.get(type_path).cloned()
}

/// 当前已注册的全部类型记录
///
/// 返回顺序未定义。
pub fn registered_descriptors() -> Vec<Arc<BeanTypeDescriptor>> {
    let catalog = TYPE_CATALOG.read();
    catalog.values().cloned().collect()
}
