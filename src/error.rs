//! 错误定义 - 轮询与通知两条错误通道
//!
//! `PollError` 覆盖一个轮询周期内的所有可恢复错误（网络、响应校验、
//! 未知状态），由监控循环统一捕获并转成故障通知。
//! `NotifyError` 是通知渠道自身的错误，属于独立通道：只记日志，
//! 绝不再触发新的通知（避免对着坏掉的渠道无限上报）。

use thiserror::Error;

/// 一个轮询周期内可能发生的错误
#[derive(Debug, Error)]
pub enum PollError {
    /// API 返回了非预期的 HTTP 状态码
    #[error("unexpected API status code: {0}")]
    RemoteStatus(u16),

    /// 响应结构不符合预期（不是对象 / homeworks 不是数组）
    #[error("malformed API response: {0}")]
    MalformedResponse(&'static str),

    /// 响应对象为空
    #[error("API response is empty")]
    EmptyResponse,

    /// 响应缺少必需的键
    #[error("API response is missing key \"{0}\"")]
    MissingField(&'static str),

    /// 作业状态不在已知状态表中
    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),

    /// 请求本身失败（连接、超时、解码）
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// 通知渠道的错误（独立通道，见模块文档）
#[derive(Debug, Error)]
pub enum NotifyError {
    /// 传输层失败
    #[error("Telegram request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Telegram API 返回了错误响应
    #[error("Telegram API error ({status}): {description}")]
    Api { status: u16, description: String },
}
