//! # Container Core
//!
//! bean 图构建引擎与上下文门面。
//!
//! ## 核心组件
//!
//! - [`BeanGraphBuilder`] - 按定义顺序的单遍图构建
//! - [`BeanRegistry`] - 插入有序、构建后只读的实例注册表
//! - [`ApplicationContext`] - 按名称 / 按类型查找门面
//! - [`discover_components`] - 组件扫描定义来源
//!
//! ## 顺序不变量
//!
//! 构建过程中的依赖解析（构造参数 ref、字段注入、设值注入）只能
//! 看到先于当前定义注册的 bean。定义顺序在后的依赖会静默缺席，
//! 不产生错误。

pub mod builder;
pub mod coerce;
pub mod context;
pub mod discovery;
pub mod registry;

pub use builder::*;
pub use coerce::*;
pub use context::*;
pub use discovery::*;
pub use registry::*;
