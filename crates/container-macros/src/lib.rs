//! # Container Macros
//!
//! 这个 crate 提供组件标记过程宏，在编译期为组件类型生成能力
//! 注册记录，替代运行时反射。
//!
//! ## 核心宏
//!
//! - [`macro@component`] - 组件标记与自动注册宏
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use container_macros::component;
//! use std::sync::Arc;
//!
//! pub trait MessageService: Send + Sync {
//!     fn message(&self) -> String;
//! }
//!
//! #[component(name = "emailService", provides(MessageService))]
//! #[derive(Debug, Default)]
//! pub struct EmailService;
//!
//! #[component(name = "notificationService")]
//! #[derive(Debug, Default)]
//! pub struct NotificationService {
//!     #[autowired]
//!     message_service: Option<Arc<dyn MessageService>>,
//! }
//! ```

use proc_macro::TokenStream;

mod component;
mod utils;

/// 组件标记与自动注册宏
///
/// 为结构体实现 `Component` trait，并生成在程序启动时把该类型的
/// 能力记录（构造方式、注入点、可赋值视图）注册到全局类型目录的
/// 代码。
///
/// # 参数
///
/// - `name = "beanName"` - 显式组件名（默认为类型短名）
/// - `provides(TraitA, TraitB)` - 组件可被赋值为的 trait 视图；
///   `Arc<Self>` 视图始终自动提供
/// - `constructor` - 注册位置参数构造方式（类型需实现 `FromBeanArgs`）
/// - `no_default` - 不注册零参构造方式
///
/// # 字段标注
///
/// - `#[autowired]` - 字段注入点；字段类型必须是 `Option<V>`
/// - `#[autowired(setter)]` - 设值注入点，经由 `self.set_<字段名>(dep)`
///
/// # 示例
///
/// ```rust,ignore
/// #[component(name = "notificationService", constructor, provides(Notifier))]
/// #[derive(Debug, Default)]
/// pub struct NotificationService {
///     #[autowired]
///     message_service: Option<Arc<dyn MessageService>>,
/// }
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}
