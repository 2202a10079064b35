//! bean 定义形状
//!
//! 两个定义来源（声明式文档与组件扫描）共同产出的中间表示，
//! 由图构建器按顺序消费一次后丢弃。

/// 生成一个 bean 实例的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanDefinition {
    /// bean id，在一个上下文内唯一
    pub id: String,
    /// 完全限定的组件类型路径，如 `example_app::services::EmailService`
    pub type_path: String,
    /// 有序的构造参数说明；扫描来源的定义恒为空
    pub constructor_args: Vec<ConstructorArg>,
    /// 属性说明；被解析保留但当前注入策略不消费
    pub properties: Vec<PropertySpec>,
}

impl BeanDefinition {
    /// 创建一个无构造参数、无属性的定义
    pub fn new(id: impl Into<String>, type_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_path: type_path.into(),
            constructor_args: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// 追加一个构造参数
    pub fn with_constructor_arg(mut self, arg: ConstructorArg) -> Self {
        self.constructor_args.push(arg);
        self
    }

    /// 追加一个属性说明
    pub fn with_property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }
}

/// 单个构造参数的说明
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorArg {
    /// 引用另一个 bean
    Ref {
        /// 被引用的 bean id
        bean_id: String,
    },
    /// 字符串字面量，可选携带原始类型标签
    Literal {
        /// 原始字面量文本
        value: String,
        /// 转换标签；`None` 表示按原样作为字符串传递
        coerce_as: Option<PrimitiveType>,
    },
}

impl ConstructorArg {
    /// 创建一个 ref 参数
    pub fn reference(bean_id: impl Into<String>) -> Self {
        Self::Ref {
            bean_id: bean_id.into(),
        }
    }

    /// 创建一个字面量参数
    pub fn literal(value: impl Into<String>, coerce_as: Option<PrimitiveType>) -> Self {
        Self::Literal {
            value: value.into(),
            coerce_as,
        }
    }
}

/// 属性说明
///
/// 与原始配置一一对应；当前注入策略不消费它。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    /// 属性名
    pub name: String,
    /// 属性值来源
    pub value: PropertyValue,
}

/// 属性值来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// 引用另一个 bean
    Ref(String),
    /// 字符串字面量
    Literal(String),
}

/// 构造参数字面量的转换标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// 32 位有符号整数
    Int,
    /// 64 位有符号整数
    Long,
    /// IEEE-754 双精度浮点
    Double,
    /// 布尔值
    Boolean,
}

impl PrimitiveType {
    /// 解析文档中的 `type` 标签
    ///
    /// 未识别的标签返回 `None`，字面量按原样以字符串传递。
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "int" | "Integer" => Some(Self::Int),
            "long" | "Long" => Some(Self::Long),
            "double" | "Double" => Some(Self::Double),
            "boolean" | "Boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}
