//! # 示例应用程序
//!
//! 演示 IoC 容器的两种装配模式：声明式 bean 文档与组件扫描。

mod services;

use clap::Parser;
use container_core::ApplicationContext;
use services::{MessageService, NotificationService};
use std::sync::Arc;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "IoC 容器示例应用")]
struct Args {
    /// bean 文档路径
    #[arg(short, long, default_value = "example-app/config/application.yaml")]
    config: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&args.log_level))
        .init();

    info!("使用声明式配置:");
    demonstrate_declarative_wiring(&args.config)?;

    info!("使用组件扫描配置:");
    demonstrate_discovery_wiring()?;

    Ok(())
}

/// 声明式模式：文档顺序由作者控制, emailService 先于
/// notificationService 定义, 构造参数 ref 因此可靠命中
fn demonstrate_declarative_wiring(config: &str) -> anyhow::Result<()> {
    let context = ApplicationContext::from_config_file(config)?;
    info!("上下文构建完成, 共 {} 个 bean", context.bean_count());

    let notification: Arc<NotificationService> = context.get_bean("notificationService")?;
    notification.send_notification();

    // 按类型查找：第一个可赋值为 MessageService 的 bean 胜出
    let message: Arc<dyn MessageService> = context.get_bean_by_type()?;
    info!("当前消息内容: {}", message.message());

    Ok(())
}

/// 扫描模式：发现顺序未定义, 通知服务的依赖可能缺席
fn demonstrate_discovery_wiring() -> anyhow::Result<()> {
    let context = ApplicationContext::from_package("example_app::services")?;
    info!("上下文构建完成, 共 {} 个 bean", context.bean_count());

    let notification: Arc<NotificationService> = context.get_bean_by_type()?;
    notification.send_notification();

    Ok(())
}

fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
