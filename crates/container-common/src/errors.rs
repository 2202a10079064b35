//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 类型解析错误
///
/// 目录中没有注册给定类型路径的组件。
#[derive(Error, Debug)]
#[error("未注册的组件类型: {type_path}")]
pub struct TypeResolutionError {
    /// 无法解析的类型路径
    pub type_path: String,
}

/// 字面量转换错误类型
#[derive(Error, Debug)]
pub enum CoercionError {
    #[error("无法将 {value:?} 解析为 int")]
    Int { value: String },

    #[error("无法将 {value:?} 解析为 long")]
    Long { value: String },

    #[error("无法将 {value:?} 解析为 double")]
    Double { value: String },
}

/// 构造参数读取错误类型
///
/// 由 [`crate::FromBeanArgs`] 实现在消费 [`crate::BeanArgs`] 时产生，
/// 最终包装进 [`BeanCreationError::ConstructorFailed`]。
#[derive(Error, Debug)]
pub enum ArgError {
    #[error("第 {position} 个构造参数种类不匹配: 期望 {expected}, 实际 {actual}")]
    WrongKind {
        position: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("第 {position} 个构造参数引用的 bean ({type_path}) 无法赋值为 {requested}")]
    NotAssignable {
        position: usize,
        type_path: String,
        requested: &'static str,
    },

    #[error("构造参数不足: 第 {position} 个参数不存在")]
    Exhausted { position: usize },
}

/// bean 创建错误类型
///
/// 图构建过程中任一 bean 失败都会中止整个上下文的构造。
#[derive(Error, Debug)]
pub enum BeanCreationError {
    #[error("bean {bean_id} 创建失败: {source}")]
    TypeResolution {
        bean_id: String,
        #[source]
        source: TypeResolutionError,
    },

    #[error("bean {bean_id} 的构造参数转换失败: {source}")]
    Coercion {
        bean_id: String,
        #[source]
        source: CoercionError,
    },

    #[error("bean {bean_id} 构造参数数量不匹配: 期望 {expected}, 实际 {actual}")]
    ArityMismatch {
        bean_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("bean {bean_id} 的类型 {type_path} 未注册构造参数注入方式")]
    NoArgConstructor { bean_id: String, type_path: String },

    #[error("bean {bean_id} 的类型 {type_path} 未注册零参构造方式")]
    NoDefaultConstructor { bean_id: String, type_path: String },

    #[error("bean {bean_id} 构造失败: {source}")]
    ConstructorFailed {
        bean_id: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("bean id 重复: {bean_id}")]
    DuplicateId { bean_id: String },
}

impl BeanCreationError {
    /// 失败的 bean id
    pub fn bean_id(&self) -> &str {
        match self {
            Self::TypeResolution { bean_id, .. }
            | Self::Coercion { bean_id, .. }
            | Self::ArityMismatch { bean_id, .. }
            | Self::NoArgConstructor { bean_id, .. }
            | Self::NoDefaultConstructor { bean_id, .. }
            | Self::ConstructorFailed { bean_id, .. }
            | Self::DuplicateId { bean_id } => bean_id,
        }
    }
}

/// 查找错误类型
///
/// 按名称或按类型查找失败只影响当前调用，不影响注册表的有效性。
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("bean 未找到: {name}")]
    NotFound { name: String },

    #[error("没有可赋值为 {requested} 的 bean")]
    TypeNotFound { requested: &'static str },

    #[error("bean {name} 的类型 {type_path} 与请求的 {requested} 不匹配")]
    TypeMismatch {
        name: String,
        type_path: String,
        requested: &'static str,
    },
}

/// 上下文构造错误类型
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("配置加载失败: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("bean 图构建失败: {source}")]
    BeanCreation {
        #[from]
        source: BeanCreationError,
    },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type BeanCreationResult<T> = Result<T, BeanCreationError>;
pub type LookupResult<T> = Result<T, LookupError>;
pub type ContextResult<T> = Result<T, ContextError>;
