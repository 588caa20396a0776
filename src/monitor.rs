//! 监控循环 - 驱动 fetch-validate-format-notify 的轮询周期
//!
//! 每个周期严格串行：拉取 → 校验 → 渲染 → 去重 → 发送 → 休眠。
//! 周期内的任何 [`PollError`] 都在这里被捕获，转成故障报告走同一条
//! 去重/发送路径；通知渠道自身的错误只记日志（见 error 模块文档）。
//! 只消费作业列表的第一条 - 单主体跟踪是有意的范围限制。

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::api::HomeworkSource;
use crate::error::PollError;
use crate::notify::NotifyChannel;
use crate::report::{Report, ReportDeduplicator};
use crate::response::check_response;
use crate::status::parse_status;

/// 轮询监控器
pub struct Monitor<S, N> {
    source: S,
    channel: N,
    dedup: ReportDeduplicator,
    /// 下一次拉取的时间下界（Unix 时间戳）
    from_date: i64,
    interval: Duration,
}

impl<S: HomeworkSource, N: NotifyChannel> Monitor<S, N> {
    /// 创建监控器；时间窗口从当前时刻开始
    pub fn new(source: S, channel: N, interval: Duration) -> Self {
        Self {
            source,
            channel,
            dedup: ReportDeduplicator::new(),
            from_date: Utc::now().timestamp(),
            interval,
        }
    }

    /// 覆盖起始时间窗口（回看历史状态时使用）
    pub fn with_from_date(mut self, from_date: i64) -> Self {
        self.from_date = from_date;
        self
    }

    /// 当前时间窗口
    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    /// 执行一次轮询，返回候选报告；没有新状态时返回 None
    ///
    /// 拉取成功后立即把时间窗口推进到当前墙钟时刻，与列表里有没有
    /// 条目无关；拉取失败则窗口保持不变，下个周期重试同一区间。
    pub async fn poll_once(&mut self) -> Result<Option<Report>, PollError> {
        let response = self.source.fetch(self.from_date).await?;
        self.from_date = Utc::now().timestamp();

        let homeworks = check_response(&response)?;
        let homework = match homeworks.first() {
            Some(homework) => homework,
            None => {
                debug!("No new homework statuses");
                return Ok(None);
            }
        };

        let text = parse_status(homework)?;
        let subject = homework
            .get("homework_name")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(Some(Report::new(subject, text)))
    }

    /// 执行一个完整周期：轮询、分类错误、去重、发送
    pub async fn run_cycle(&mut self) {
        let candidate = match self.poll_once().await {
            Ok(candidate) => candidate,
            Err(error) => {
                error!(%error, "Poll cycle failed");
                Some(Report::malfunction(&error))
            }
        };

        if let Some(report) = candidate {
            self.deliver(&report).await;
        }
    }

    /// 去重后发送；渠道错误只记日志，不再产生新的通知
    async fn deliver(&mut self, report: &Report) {
        if !self.dedup.should_send(report) {
            return;
        }

        if let Err(error) = self.channel.send(&report.text).await {
            error!(channel = self.channel.name(), %error, "Failed to deliver notification");
        }
    }

    /// 持续运行：每个周期之后固定休眠，成功与失败路径一致
    pub async fn run(&mut self) {
        info!(
            interval_secs = self.interval.as_secs(),
            from_date = self.from_date,
            "Homework monitor started"
        );

        loop {
            self.run_cycle().await;
            sleep(self.interval).await;
        }
    }
}
