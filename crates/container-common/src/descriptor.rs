//! 组件类型能力记录
//!
//! 每个组件类型在程序启动时注册一条 [`BeanTypeDescriptor`]：
//! 如何构造、哪些字段/设值方法需要注入、可以被借出为哪些类型化视图。
//! 这是对运行时反射的显式替代，图构建器只通过它操作组件类型。

use crate::errors::ArgError;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 构造完成、尚未入册的 bean 实例
pub type BeanInstance = Box<dyn Any + Send + Sync>;

/// 注册表中共享持有的 bean 实例
pub type SharedBean = Arc<dyn Any + Send + Sync>;

/// 从共享实例借出的一个类型化视图（`Arc<T>` 或 `Arc<dyn Trait>`）
pub type BoxedView = Box<dyn Any>;

/// 一条已解析的 bean 引用：实例与其类型记录
pub struct ResolvedRef {
    /// 被引用的实例
    pub instance: SharedBean,
    /// 被引用实例的类型记录
    pub descriptor: Arc<BeanTypeDescriptor>,
}

impl fmt::Debug for ResolvedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedRef")
            .field("type_path", &self.descriptor.type_path)
            .finish()
    }
}

/// 单个构造参数的已解析值
#[derive(Debug)]
pub enum ArgValue {
    /// ref 参数；`None` 表示引用的 bean 在解析时尚未注册
    Bean(Option<ResolvedRef>),
    /// 按 `int` 标签转换后的字面量
    Int(i32),
    /// 按 `long` 标签转换后的字面量
    Long(i64),
    /// 按 `double` 标签转换后的字面量
    Double(f64),
    /// 按 `boolean` 标签转换后的字面量
    Bool(bool),
    /// 未标注标签、按原样传递的字面量
    Str(String),
}

impl ArgValue {
    /// 值种类名，用于错误报告
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bean(_) => "ref",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Double(_) => "double",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
        }
    }
}

/// 位置参数游标
///
/// 交给 [`crate::FromBeanArgs::from_bean_args`] 按声明顺序逐个读取。
/// 各读取方法在种类不匹配或越界时返回 [`ArgError`]。
pub struct BeanArgs {
    values: std::vec::IntoIter<ArgValue>,
    position: usize,
}

impl BeanArgs {
    /// 用已解析的参数序列创建游标
    pub fn new(values: Vec<ArgValue>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    fn take(&mut self) -> Result<ArgValue, ArgError> {
        self.position += 1;
        self.values.next().ok_or(ArgError::Exhausted {
            position: self.position,
        })
    }

    /// 读取一个 ref 参数并借出为视图 `V`
    ///
    /// 引用的 bean 尚未注册时返回 `Ok(None)`（定义顺序在后的依赖
    /// 静默缺席，不是错误）；已注册但无法赋值为 `V` 时返回
    /// [`ArgError::NotAssignable`]。
    pub fn bean<V: Any>(&mut self) -> Result<Option<V>, ArgError> {
        match self.take()? {
            ArgValue::Bean(None) => Ok(None),
            ArgValue::Bean(Some(resolved)) => {
                let not_assignable = || ArgError::NotAssignable {
                    position: self.position,
                    type_path: resolved.descriptor.type_path.to_string(),
                    requested: std::any::type_name::<V>(),
                };
                let view = resolved
                    .descriptor
                    .provide(TypeId::of::<V>(), &resolved.instance)
                    .ok_or_else(|| not_assignable())?;
                let view = view.downcast::<V>().map_err(|_| not_assignable())?;
                Ok(Some(*view))
            }
            other => Err(ArgError::WrongKind {
                position: self.position,
                expected: "ref",
                actual: other.kind_name(),
            }),
        }
    }

    /// 读取一个 int 字面量
    pub fn int(&mut self) -> Result<i32, ArgError> {
        match self.take()? {
            ArgValue::Int(value) => Ok(value),
            other => Err(self.wrong_kind("int", &other)),
        }
    }

    /// 读取一个 long 字面量
    pub fn long(&mut self) -> Result<i64, ArgError> {
        match self.take()? {
            ArgValue::Long(value) => Ok(value),
            other => Err(self.wrong_kind("long", &other)),
        }
    }

    /// 读取一个 double 字面量
    pub fn double(&mut self) -> Result<f64, ArgError> {
        match self.take()? {
            ArgValue::Double(value) => Ok(value),
            other => Err(self.wrong_kind("double", &other)),
        }
    }

    /// 读取一个 boolean 字面量
    pub fn boolean(&mut self) -> Result<bool, ArgError> {
        match self.take()? {
            ArgValue::Bool(value) => Ok(value),
            other => Err(self.wrong_kind("boolean", &other)),
        }
    }

    /// 读取一个未标注标签的字符串字面量
    pub fn string(&mut self) -> Result<String, ArgError> {
        match self.take()? {
            ArgValue::Str(value) => Ok(value),
            other => Err(self.wrong_kind("string", &other)),
        }
    }

    fn wrong_kind(&self, expected: &'static str, actual: &ArgValue) -> ArgError {
        ArgError::WrongKind {
            position: self.position,
            expected,
            actual: actual.kind_name(),
        }
    }
}

/// 位置参数构造入口
#[derive(Debug, Clone, Copy)]
pub struct ArgConstructor {
    /// 期望的参数个数
    pub arity: usize,
    /// 构造函数胶水：消费参数游标，产出实例
    pub build: fn(BeanArgs) -> Result<BeanInstance, ArgError>,
}

/// 注入点种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionKind {
    /// 直接字段赋值
    Field,
    /// 经由设值方法
    Setter,
}

/// 一个字段或设值方法注入点
#[derive(Debug, Clone, Copy)]
pub struct InjectionPoint {
    /// 字段名
    pub member: &'static str,
    /// 注入种类
    pub kind: InjectionKind,
    /// 声明的依赖视图类型
    pub target: TypeId,
    /// 依赖视图类型名，用于日志
    pub target_name: &'static str,
    /// 注入胶水：把借出的视图写入构造中的实例
    ///
    /// 返回 `false` 表示视图与实例类型不符（按构造不应发生）。
    pub apply: fn(&mut dyn Any, BoxedView) -> bool,
}

/// 类型可借出的一个视图
#[derive(Debug, Clone, Copy)]
pub struct ProvidedView {
    /// 视图类型
    pub target: TypeId,
    /// 视图类型名，用于日志
    pub target_name: &'static str,
    /// 从共享实例借出该视图；实例类型不符时返回 `None`
    pub cast: fn(&SharedBean) -> Option<BoxedView>,
}

impl ProvidedView {
    /// 类型自身的 `Arc<T>` 视图
    pub fn of<T: Send + Sync + 'static>() -> Self {
        Self {
            target: TypeId::of::<Arc<T>>(),
            target_name: std::any::type_name::<Arc<T>>(),
            cast: |shared| {
                shared
                    .clone()
                    .downcast::<T>()
                    .ok()
                    .map(|arc| Box::new(arc) as BoxedView)
            },
        }
    }
}

/// 组件类型的能力注册记录
///
/// 由 `#[component]` 宏在程序启动时生成并注册一次，之后只读。
#[derive(Debug)]
pub struct BeanTypeDescriptor {
    /// 完全限定类型路径
    pub type_path: &'static str,
    /// 类型所在模块路径
    pub module_path: &'static str,
    /// 类型短名
    pub short_name: &'static str,
    /// 组件名（显式标注的名称，或类型短名）
    pub component_name: &'static str,
    /// 类型 ID
    pub type_id: TypeId,
    /// 零参构造入口
    pub construct_default: Option<fn() -> BeanInstance>,
    /// 位置参数构造入口；一个类型至多注册一个
    pub construct_args: Option<ArgConstructor>,
    /// 字段注入点，按声明顺序
    pub fields: Vec<InjectionPoint>,
    /// 设值方法注入点，按声明顺序
    pub setters: Vec<InjectionPoint>,
    /// 可借出的视图集合；首项恒为 `Arc<Self>`
    pub provides: Vec<ProvidedView>,
}

impl BeanTypeDescriptor {
    /// 借出实例的 `target` 视图；该类型不提供此视图时返回 `None`
    pub fn provide(&self, target: TypeId, instance: &SharedBean) -> Option<BoxedView> {
        self.provides
            .iter()
            .find(|view| view.target == target)
            .and_then(|view| (view.cast)(instance))
    }

    /// 该类型是否可赋值为 `target` 视图
    pub fn provides_type(&self, target: TypeId) -> bool {
        self.provides.iter().any(|view| view.target == target)
    }
}
