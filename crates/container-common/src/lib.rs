//! # Container Common
//!
//! IoC 容器的公共层：bean 定义形状、类型能力目录和错误分类。
//!
//! ## 核心类型
//!
//! - [`BeanDefinition`] - 生成一个 bean 实例的声明式请求
//! - [`BeanTypeDescriptor`] - 组件类型的能力注册记录（如何构造、注入点、可赋值视图）
//! - [`Component`] - 受管组件的基础 trait
//! - [`FromBeanArgs`] - 位置参数构造 trait
//!
//! ## 设计原则
//!
//! - 基于编译期生成的能力目录，而非运行时反射
//! - 定义来源（声明式文档 / 组件扫描）与图构建解耦
//! - 统一的类型化错误分类

pub mod catalog;
pub mod definition;
pub mod descriptor;
pub mod errors;

pub use catalog::*;
pub use definition::*;
pub use descriptor::*;
pub use errors::*;

/// 受管组件的基础 trait
///
/// 所有通过 `#[component]` 标记的类型都会获得此 trait 的实现。
pub trait Component: Send + Sync + 'static {
    /// 组件名称（显式标注的名称，或类型短名）
    fn name(&self) -> &'static str;
}

/// 位置参数构造 trait
///
/// 支持构造参数注入的组件实现此 trait，描述如何从一组
/// 已解析的位置参数构建自身。参数个数必须等于 [`FromBeanArgs::ARITY`]。
pub trait FromBeanArgs: Sized {
    /// 构造参数个数
    const ARITY: usize;

    /// 从位置参数构建组件实例
    fn from_bean_args(args: BeanArgs) -> Result<Self, ArgError>;
}
