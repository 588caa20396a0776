//! Homework Review Monitor CLI
//!
//! 轮询作业评审 API，状态变化时推送 Telegram 通知

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use homework_monitor::{Config, Monitor, PracticumClient, TelegramSender, ENDPOINT};

/// 默认轮询间隔（秒）
const DEFAULT_INTERVAL_SECS: u64 = 600;

#[derive(Parser)]
#[command(name = "hwmon")]
#[command(about = "Homework Review Monitor - 轮询作业评审状态并推送 Telegram 通知")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 持续轮询并推送状态变更通知
    Run {
        /// 轮询间隔（秒）
        #[arg(long, short, default_value_t = DEFAULT_INTERVAL_SECS)]
        interval: u64,
        /// 起始时间窗口（Unix 时间戳，默认为当前时刻）
        #[arg(long)]
        from_date: Option<i64>,
    },
    /// 只执行一次轮询，打印候选通知后退出（不发送）
    Once {
        /// 起始时间窗口（Unix 时间戳，默认为当前时刻）
        #[arg(long)]
        from_date: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 通过 RUST_LOG 控制日志级别，默认 info
    // 例如: RUST_LOG=debug hwmon run
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("homework_monitor=info,hwmon=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // 必需配置缺失时在进入轮询循环之前终止
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(reason) => {
            error!(%reason, "Missing required configuration, refusing to start");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Run {
            interval,
            from_date,
        } => {
            let mut monitor = build_monitor(&config, Duration::from_secs(interval), from_date);
            monitor.run().await;
        }
        Commands::Once { from_date } => {
            let mut monitor = build_monitor(&config, Duration::ZERO, from_date);
            match monitor.poll_once().await? {
                Some(report) => println!("{}", report.text),
                None => println!("No new homework statuses"),
            }
        }
    }

    Ok(())
}

fn build_monitor(
    config: &Config,
    interval: Duration,
    from_date: Option<i64>,
) -> Monitor<PracticumClient, TelegramSender> {
    let source = PracticumClient::new(&config.practicum_token, ENDPOINT);
    let channel = TelegramSender::new(&config.telegram_token, &config.telegram_chat_id);

    let monitor = Monitor::new(source, channel, interval);
    match from_date {
        Some(from_date) => monitor.with_from_date(from_date),
        None => monitor,
    }
}
