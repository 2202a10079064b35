//! 示例业务组件

use container_common::{ArgError, BeanArgs, FromBeanArgs};
use container_macros::component;
use std::sync::Arc;
use tracing::{info, warn};

/// 消息服务
pub trait MessageService: Send + Sync + std::fmt::Debug {
    /// 产出一条待发送的消息文本
    fn message(&self) -> String;
}

/// 邮件消息服务
#[component(name = "emailService", provides(MessageService))]
#[derive(Debug, Default)]
pub struct EmailService;

impl MessageService for EmailService {
    fn message(&self) -> String {
        "This is an email message".to_string()
    }
}

/// 通知服务
///
/// 声明式模式下经构造参数注入消息服务；扫描模式下经字段注入。
/// 两个被扫描组件之间的装配依赖发现顺序，消息服务可能缺席，
/// 因此发送路径要容忍未装配状态。
#[component(name = "notificationService", constructor)]
#[derive(Debug, Default)]
pub struct NotificationService {
    #[autowired]
    message_service: Option<Arc<dyn MessageService>>,
}

impl FromBeanArgs for NotificationService {
    const ARITY: usize = 1;

    fn from_bean_args(mut args: BeanArgs) -> Result<Self, ArgError> {
        Ok(Self {
            message_service: args.bean()?,
        })
    }
}

impl NotificationService {
    /// 发送一条通知
    pub fn send_notification(&self) {
        match &self.message_service {
            Some(service) => info!("Sending notification: {}", service.message()),
            None => warn!("消息服务未装配, 通知未发送"),
        }
    }
}
