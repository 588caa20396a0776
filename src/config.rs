//! 配置 - 启动时从进程环境一次性构建
//!
//! 三个必需项：Practicum API token、Telegram bot token、目标 chat。
//! 任何一项缺失（或为空白）都在进入轮询循环之前失败。

use anyhow::{anyhow, Result};

/// 运行所需的全部外部配置
#[derive(Debug, Clone)]
pub struct Config {
    /// Practicum API 的 OAuth token
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// 接收通知的 chat ID
    pub telegram_chat_id: String,
}

impl Config {
    /// 从环境变量加载
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            practicum_token: require_env("PRACTICUM_TOKEN")?,
            telegram_token: require_env("TELEGRAM_TOKEN")?,
            telegram_chat_id: require_env("TELEGRAM_CHAT_ID")?,
        })
    }
}

/// 读取一个必需的环境变量，缺失或空白视为未设置
fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("required environment variable {} is not set", name)),
    }
}
