//! bean 文档的数据绑定结构

use serde::Deserialize;

/// bean 文档根节点
#[derive(Debug, Deserialize)]
pub struct BeansDocument {
    /// 文档顺序的 bean 条目
    pub beans: Vec<BeanEntry>,
}

/// 单个 bean 条目
#[derive(Debug, Deserialize)]
pub struct BeanEntry {
    /// bean id
    pub id: String,
    /// 完全限定的组件类型路径
    pub class: String,
    /// 有序的构造参数条目
    #[serde(rename = "constructor-args", default)]
    pub constructor_args: Vec<ArgEntry>,
    /// 属性条目
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

/// 构造参数条目
///
/// `ref` 与 `value` 二选一；两者都出现时 `ref` 优先。
#[derive(Debug, Deserialize)]
pub struct ArgEntry {
    /// 引用的 bean id
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// 字面量文本
    pub value: Option<String>,
    /// 字面量的原始类型标签
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
}

/// 属性条目
#[derive(Debug, Deserialize)]
pub struct PropertyEntry {
    /// 属性名
    pub name: String,
    /// 引用的 bean id
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// 字面量文本
    pub value: Option<String>,
}
