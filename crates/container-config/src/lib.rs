//! # Container Config
//!
//! 声明式定义来源：把 YAML bean 文档反序列化为有序的
//! [`container_common::BeanDefinition`] 序列。
//!
//! 返回序列的顺序与文档顺序一致——依赖解析只能看到先于当前
//! 定义注册的 bean，因此文档顺序是有语义的。

pub mod document;
pub mod loader;

pub use document::*;
pub use loader::*;
