//! Practicum API 客户端 - 拉取指定时间点之后更新的作业状态
//!
//! 鉴权用 `Authorization: OAuth {token}` 头，时间下界通过 `from_date`
//! 查询参数传递。响应按 JSON 解码后原样返回，结构校验交给
//! [`crate::response::check_response`]。

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::PollError;

/// 作业状态 API 端点
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// 作业数据源抽象
///
/// 监控循环只依赖这个 trait，真实实现是 [`PracticumClient`]，
/// 测试里用脚本化的替身。
#[async_trait]
pub trait HomeworkSource {
    /// 拉取 `from_date` 之后更新的作业状态响应
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// Practicum API 客户端
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// 创建客户端；`endpoint` 可替换，便于指向测试环境
    pub fn new(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

/// 非 200 的状态码一律视为远端错误
pub(crate) fn ensure_success(status: u16) -> Result<(), PollError> {
    if status != 200 {
        return Err(PollError::RemoteStatus(status));
    }
    Ok(())
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", from_date)])
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .await?;

        ensure_success(response.status().as_u16())?;

        let body = response.json::<Value>().await?;
        info!("Received API answer");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_success_accepts_only_200() {
        assert!(ensure_success(200).is_ok());

        for status in [201, 301, 400, 401, 404, 500, 503] {
            match ensure_success(status) {
                Err(PollError::RemoteStatus(code)) => assert_eq!(code, status),
                other => panic!("expected RemoteStatus, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_client_keeps_configured_endpoint() {
        let client = PracticumClient::new("token", "http://localhost:9000/api/");
        assert_eq!(client.endpoint, "http://localhost:9000/api/");
    }
}
