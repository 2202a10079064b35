//! IoC 容器集中集成测试
//!
//! 覆盖图构建的顺序不变量、两类注入解析、字面量转换与查找门面。

use container_common::{
    BeanCreationError, BeanDefinition, Component, ConstructorArg, ContextError, LookupError,
    PrimitiveType, PropertySpec, PropertyValue,
};
use container_core::ApplicationContext;
use std::io::Write;
use std::sync::Arc;

mod messaging {
    use container_common::{ArgError, BeanArgs, FromBeanArgs};
    use container_macros::component;
    use std::sync::Arc;

    /// 测试用消息服务
    pub trait MessageService: Send + Sync + std::fmt::Debug {
        fn message(&self) -> String;
    }

    #[component(name = "emailService", provides(MessageService))]
    #[derive(Debug, Default)]
    pub struct EmailService;

    impl MessageService for EmailService {
        fn message(&self) -> String {
            "email".to_string()
        }
    }

    #[component(name = "smsService", provides(MessageService))]
    #[derive(Debug, Default)]
    pub struct SmsService;

    impl MessageService for SmsService {
        fn message(&self) -> String {
            "sms".to_string()
        }
    }

    /// 声明式模式经构造参数注入, 扫描模式经字段注入
    #[component(name = "notificationService", constructor)]
    #[derive(Debug, Default)]
    pub struct NotificationService {
        #[autowired]
        pub message_service: Option<Arc<dyn MessageService>>,
    }

    impl FromBeanArgs for NotificationService {
        const ARITY: usize = 1;

        fn from_bean_args(mut args: BeanArgs) -> Result<Self, ArgError> {
            Ok(Self {
                message_service: args.bean()?,
            })
        }
    }

    /// 经设值方法注入
    #[component(name = "auditService")]
    #[derive(Debug, Default)]
    pub struct AuditService {
        #[autowired(setter)]
        sink: Option<Arc<dyn MessageService>>,
    }

    impl AuditService {
        pub fn set_sink(&mut self, sink: Arc<dyn MessageService>) {
            self.sink = Some(sink);
        }

        pub fn sink(&self) -> Option<&Arc<dyn MessageService>> {
            self.sink.as_ref()
        }
    }

    /// 全部字面量构造参数, 无零参构造方式
    #[component(name = "retryPolicy", constructor, no_default)]
    #[derive(Debug)]
    pub struct RetryPolicy {
        pub attempts: i32,
        pub backoff_millis: i64,
        pub jitter: f64,
        pub enabled: bool,
        pub label: String,
    }

    impl FromBeanArgs for RetryPolicy {
        const ARITY: usize = 5;

        fn from_bean_args(mut args: BeanArgs) -> Result<Self, ArgError> {
            Ok(Self {
                attempts: args.int()?,
                backoff_millis: args.long()?,
                jitter: args.double()?,
                enabled: args.boolean()?,
                label: args.string()?,
            })
        }
    }

    /// 无注入点, 用于验证属性说明被解析但不被消费
    #[component(name = "plainHolder")]
    #[derive(Debug, Default)]
    pub struct PlainHolder {
        pub value: Option<String>,
    }
}

mod discovery {
    use container_macros::component;

    #[component]
    #[derive(Debug, Default)]
    pub struct CacheService;

    #[component(name = "metrics")]
    #[derive(Debug, Default)]
    pub struct MetricsService;
}

use messaging::{
    AuditService, EmailService, MessageService, NotificationService, PlainHolder, RetryPolicy,
    SmsService,
};

fn email_definition(id: &str) -> BeanDefinition {
    BeanDefinition::new(id, "integration_test::messaging::EmailService")
}

fn sms_definition(id: &str) -> BeanDefinition {
    BeanDefinition::new(id, "integration_test::messaging::SmsService")
}

#[test]
fn test_registry_entry_count_equals_definition_count() {
    let context = ApplicationContext::from_definitions(vec![
        email_definition("emailService"),
        BeanDefinition::new(
            "notificationService",
            "integration_test::messaging::NotificationService",
        )
        .with_constructor_arg(ConstructorArg::reference("emailService")),
    ])
    .unwrap();

    assert_eq!(context.bean_count(), 2);
    assert!(context.contains_bean("emailService"));
    assert!(context.contains_bean("notificationService"));
}

#[test]
fn test_constructor_ref_to_earlier_bean_receives_that_exact_instance() {
    let context = ApplicationContext::from_definitions(vec![
        email_definition("emailService"),
        BeanDefinition::new(
            "notificationService",
            "integration_test::messaging::NotificationService",
        )
        .with_constructor_arg(ConstructorArg::reference("emailService")),
    ])
    .unwrap();

    let email: Arc<dyn MessageService> = context.get_bean("emailService").unwrap();
    let notification: Arc<NotificationService> = context.get_bean("notificationService").unwrap();

    let bound = notification.message_service.as_ref().unwrap();
    assert!(Arc::ptr_eq(bound, &email));
}

#[test]
fn test_constructor_ref_to_later_bean_is_a_silent_null() {
    // notificationService 先于其依赖定义: 构建成功, 依赖缺席
    let context = ApplicationContext::from_definitions(vec![
        BeanDefinition::new(
            "notificationService",
            "integration_test::messaging::NotificationService",
        )
        .with_constructor_arg(ConstructorArg::reference("emailService")),
        email_definition("emailService"),
    ])
    .unwrap();

    let notification: Arc<NotificationService> = context.get_bean("notificationService").unwrap();
    assert!(notification.message_service.is_none());
}

#[test]
fn test_field_injection_binds_earliest_inserted_assignable_bean() {
    let context = ApplicationContext::from_definitions(vec![
        email_definition("emailService"),
        sms_definition("smsService"),
        BeanDefinition::new(
            "notificationService",
            "integration_test::messaging::NotificationService",
        ),
    ])
    .unwrap();

    let email: Arc<dyn MessageService> = context.get_bean("emailService").unwrap();
    let sms: Arc<dyn MessageService> = context.get_bean("smsService").unwrap();
    let notification: Arc<NotificationService> = context.get_bean("notificationService").unwrap();

    let bound = notification.message_service.as_ref().unwrap();
    assert!(Arc::ptr_eq(bound, &email));
    assert!(!Arc::ptr_eq(bound, &sms));
    assert_eq!(bound.message(), "email");
}

#[test]
fn test_setter_injection_binds_earliest_inserted_assignable_bean() {
    let context = ApplicationContext::from_definitions(vec![
        sms_definition("smsService"),
        email_definition("emailService"),
        BeanDefinition::new("auditService", "integration_test::messaging::AuditService"),
    ])
    .unwrap();

    let sms: Arc<dyn MessageService> = context.get_bean("smsService").unwrap();
    let audit: Arc<AuditService> = context.get_bean("auditService").unwrap();

    assert!(Arc::ptr_eq(audit.sink().unwrap(), &sms));
}

#[test]
fn test_injection_without_candidate_is_a_silent_noop() {
    let context = ApplicationContext::from_definitions(vec![BeanDefinition::new(
        "notificationService",
        "integration_test::messaging::NotificationService",
    )])
    .unwrap();

    let notification: Arc<NotificationService> = context.get_bean("notificationService").unwrap();
    assert!(notification.message_service.is_none());
}

#[test]
fn test_literal_coercion_into_constructor_args() {
    let context = ApplicationContext::from_definitions(vec![BeanDefinition::new(
        "retryPolicy",
        "integration_test::messaging::RetryPolicy",
    )
    .with_constructor_arg(ConstructorArg::literal("42", Some(PrimitiveType::Int)))
    .with_constructor_arg(ConstructorArg::literal(
        "9000000000",
        Some(PrimitiveType::Long),
    ))
    .with_constructor_arg(ConstructorArg::literal("0.5", Some(PrimitiveType::Double)))
    .with_constructor_arg(ConstructorArg::literal("true", Some(PrimitiveType::Boolean)))
    .with_constructor_arg(ConstructorArg::literal("primary", None))])
    .unwrap();

    let policy: Arc<RetryPolicy> = context.get_bean("retryPolicy").unwrap();
    assert_eq!(policy.attempts, 42);
    assert_eq!(policy.backoff_millis, 9_000_000_000);
    assert!((policy.jitter - 0.5).abs() < f64::EPSILON);
    assert!(policy.enabled);
    assert_eq!(policy.label, "primary");
}

#[test]
fn test_non_numeric_int_literal_aborts_construction() {
    let err = ApplicationContext::from_definitions(vec![BeanDefinition::new(
        "retryPolicy",
        "integration_test::messaging::RetryPolicy",
    )
    .with_constructor_arg(ConstructorArg::literal("abc", Some(PrimitiveType::Int)))
    .with_constructor_arg(ConstructorArg::literal("1", Some(PrimitiveType::Long)))
    .with_constructor_arg(ConstructorArg::literal("0.1", Some(PrimitiveType::Double)))
    .with_constructor_arg(ConstructorArg::literal("true", Some(PrimitiveType::Boolean)))
    .with_constructor_arg(ConstructorArg::literal("x", None))])
    .unwrap_err();

    assert!(matches!(
        err,
        ContextError::BeanCreation {
            source: BeanCreationError::Coercion { .. }
        }
    ));
}

#[test]
fn test_arity_mismatch_aborts_construction() {
    let err = ApplicationContext::from_definitions(vec![BeanDefinition::new(
        "retryPolicy",
        "integration_test::messaging::RetryPolicy",
    )
    .with_constructor_arg(ConstructorArg::literal("42", Some(PrimitiveType::Int)))])
    .unwrap_err();

    assert!(matches!(
        err,
        ContextError::BeanCreation {
            source: BeanCreationError::ArityMismatch {
                expected: 5,
                actual: 1,
                ..
            }
        }
    ));
}

#[test]
fn test_no_default_constructor_aborts_construction() {
    let err = ApplicationContext::from_definitions(vec![BeanDefinition::new(
        "retryPolicy",
        "integration_test::messaging::RetryPolicy",
    )])
    .unwrap_err();

    assert!(matches!(
        err,
        ContextError::BeanCreation {
            source: BeanCreationError::NoDefaultConstructor { .. }
        }
    ));
}

#[test]
fn test_duplicate_bean_id_aborts_construction() {
    let err = ApplicationContext::from_definitions(vec![
        email_definition("emailService"),
        email_definition("emailService"),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        ContextError::BeanCreation {
            source: BeanCreationError::DuplicateId { .. }
        }
    ));
}

#[test]
fn test_lookup_by_name_failures() {
    let context =
        ApplicationContext::from_definitions(vec![email_definition("emailService")]).unwrap();

    let err = context
        .get_bean::<Arc<EmailService>>("missingService")
        .unwrap_err();
    assert!(matches!(err, LookupError::NotFound { .. }));

    // id 存在但存储的实例无法借出请求的视图
    let err = context
        .get_bean::<Arc<SmsService>>("emailService")
        .unwrap_err();
    assert!(matches!(err, LookupError::TypeMismatch { .. }));
}

#[test]
fn test_lookup_by_type_failures_and_determinism() {
    let context = ApplicationContext::from_definitions(vec![
        email_definition("emailService"),
        sms_definition("smsService"),
    ])
    .unwrap();

    let err = context.get_bean_by_type::<Arc<RetryPolicy>>().unwrap_err();
    assert!(matches!(err, LookupError::TypeNotFound { .. }));

    // 两个可赋值候选: 最早插入者胜出, 且重复调用结果稳定
    let email: Arc<dyn MessageService> = context.get_bean("emailService").unwrap();
    for _ in 0..5 {
        let found: Arc<dyn MessageService> = context.get_bean_by_type().unwrap();
        assert!(Arc::ptr_eq(&found, &email));
    }
}

#[test]
fn test_property_specs_are_parsed_but_never_applied() {
    let context = ApplicationContext::from_definitions(vec![BeanDefinition::new(
        "plainHolder",
        "integration_test::messaging::PlainHolder",
    )
    .with_property(PropertySpec {
        name: "value".to_string(),
        value: PropertyValue::Literal("ignored".to_string()),
    })])
    .unwrap();

    let holder: Arc<PlainHolder> = context.get_bean("plainHolder").unwrap();
    assert!(holder.value.is_none());
}

#[test]
fn test_end_to_end_declarative_document() {
    let document = r#"
beans:
  - id: emailService
    class: integration_test::messaging::EmailService
  - id: notificationService
    class: integration_test::messaging::NotificationService
    constructor-args:
      - ref: emailService
    properties:
      - name: channel
        value: primary
"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", document).unwrap();

    let context = ApplicationContext::from_config_file(file.path()).unwrap();
    assert_eq!(context.bean_count(), 2);

    let email: Arc<EmailService> = context.get_bean("emailService").unwrap();
    let notification: Arc<NotificationService> = context.get_bean("notificationService").unwrap();

    let email_view: Arc<dyn MessageService> = context.get_bean("emailService").unwrap();
    assert!(Arc::ptr_eq(
        notification.message_service.as_ref().unwrap(),
        &email_view
    ));
    assert_eq!(email.message(), "email");
    assert_eq!(email.name(), "emailService");
    assert_eq!(notification.name(), "notificationService");
}

#[test]
fn test_missing_document_fails_context_construction() {
    let err = ApplicationContext::from_config_file("/no/such/document.yaml").unwrap_err();
    assert!(matches!(err, ContextError::Config { .. }));
}

#[test]
fn test_package_discovery_registers_marked_components() {
    let context = ApplicationContext::from_package("integration_test::discovery").unwrap();

    // 发现顺序未定义, 只断言集合内容
    assert_eq!(context.bean_count(), 2);
    assert!(context.contains_bean("CacheService"));
    assert!(context.contains_bean("metrics"));

    let _cache: Arc<discovery::CacheService> = context.get_bean("CacheService").unwrap();
}

#[test]
fn test_package_discovery_with_no_matches_yields_empty_context() {
    let context = ApplicationContext::from_package("integration_test::nowhere").unwrap();
    assert_eq!(context.bean_count(), 0);
}
