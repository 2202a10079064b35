//! 组件扫描定义来源
//!
//! 在全局类型目录中按模块路径前缀筛选带标记的组件，每个命中
//! 产出一个无构造参数、无属性的定义。

use container_common::{registered_descriptors, BeanDefinition};
use tracing::info;

/// 扫描给定包（模块路径前缀）下的组件
///
/// 返回顺序未定义——目录迭代顺序即映射顺序。两个互相依赖的
/// 被扫描组件的装配因此不可靠；调用方不得依赖发现顺序。
pub fn discover_components(base_package: &str) -> Vec<BeanDefinition> {
    info!("扫描包: {}", base_package);

    let definitions: Vec<BeanDefinition> = registered_descriptors()
        .into_iter()
        .filter(|descriptor| module_matches(descriptor.module_path, base_package))
        .map(|descriptor| BeanDefinition::new(descriptor.component_name, descriptor.type_path))
        .collect();

    info!(
        "扫描包 {} 完成, 发现 {} 个组件",
        base_package,
        definitions.len()
    );
    definitions
}

/// 模块路径是否落在包前缀下
///
/// 前缀匹配只在 `::` 边界生效, `demo::service` 不会命中
/// `demo::services` 下的组件。
fn module_matches(module_path: &str, base_package: &str) -> bool {
    module_path == base_package
        || module_path
            .strip_prefix(base_package)
            .is_some_and(|rest| rest.starts_with("::"))
}
