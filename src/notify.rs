//! 通知渠道 - Telegram Bot API 投递
//!
//! 渠道错误属于独立通道：调用方只记日志，不再把它转成新的故障通知
//! （见 [`crate::error::NotifyError`] 的模块文档）。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::NotifyError;

/// Telegram Bot API 基础 URL
const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// 通知渠道抽象
#[async_trait]
pub trait NotifyChannel {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 发送一条文本消息
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// sendMessage 请求体
#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// sendMessage 响应体（只取 ok / description）
#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram 通知渠道
pub struct TelegramSender {
    client: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramSender {
    pub fn new(token: &str, chat_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            send_url: format!("{}/bot{}/sendMessage", TELEGRAM_API_URL, token),
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait]
impl NotifyChannel for TelegramSender {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!("Sending message to Telegram");

        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self.client.post(&self.send_url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // 尝试从错误响应里取 description，取不到就带上原始 body
            let description = serde_json::from_str::<SendMessageResponse>(&body)
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(NotifyError::Api {
                status: status.as_u16(),
                description,
            });
        }

        if let Ok(parsed) = serde_json::from_str::<SendMessageResponse>(&body) {
            if !parsed.ok {
                return Err(NotifyError::Api {
                    status: status.as_u16(),
                    description: parsed.description.unwrap_or_default(),
                });
            }
        }

        info!("Message delivered to Telegram");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_url_embeds_token() {
        let sender = TelegramSender::new("123:ABC", "42");
        assert_eq!(
            sender.send_url,
            "https://api.telegram.org/bot123:ABC/sendMessage"
        );
        assert_eq!(sender.chat_id, "42");
    }

    #[test]
    fn test_error_response_parsing() {
        let body =
            r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#;
        let parsed: SendMessageResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.ok);
        assert_eq!(
            parsed.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }
}
