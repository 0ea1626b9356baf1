//! # 示例应用程序
//!
//! 演示声明式服务注册：加载配置、初始化日志、
//! 从进程级类型表注册服务并输出注册结果

mod services;

use anyhow::Context;
use clap::Parser;
use di_abstractions::ScanOptions;
use di_impl::{AutoServiceCollectionExt, ServiceCollection, TypeCatalog};
use infrastructure_common::{InfrastructureError, Lifetime, LoggingConfig, RegistrationOptions};
use std::path::PathBuf;
use tracing::{error, info};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "声明式服务注册示例应用")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别，覆盖配置文件
    #[arg(long)]
    log_level: Option<String>,

    /// 只列出指定生命周期的绑定 (singleton、scoped、transient)
    #[arg(long)]
    lifetime: Option<Lifetime>,

    /// 以 JSON 格式输出注册报告
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut options =
        RegistrationOptions::load(args.config.as_deref()).context("加载注册配置失败")?;
    if let Some(level) = &args.log_level {
        options.logging.level = level.clone();
    }

    initialize_logging(&options.logging)?;
    info!("启动声明式服务注册示例应用");

    let scan_options = ScanOptions::from_options(&options)?;
    let mut services = ServiceCollection::new();
    let report = services
        .add_auto_services_with(&[TypeCatalog::from_global()], scan_options)
        .map_err(|e| {
            error!("服务注册失败: {}", e);
            e
        })?;

    println!("已注册 {} 条服务绑定:", services.len());
    for binding in services
        .iter()
        .filter(|binding| args.lifetime.map_or(true, |lifetime| binding.lifetime == lifetime))
    {
        println!("  {}", binding);
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!(
            "扫描 {} 个类型，注册 {} 个类型，排除 {} 个类型",
            report.types_scanned, report.types_registered, report.types_excluded
        );
    }

    info!("应用已完成");
    Ok(())
}

/// 初始化日志
fn initialize_logging(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_target(config.show_target);

    if config.json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| InfrastructureError::BootstrapFailed {
        message: format!("日志初始化失败: {}", e),
    })
}
