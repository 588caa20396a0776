//! 通知去重 - 记录最近一次投递的报告，抑制重复发送
//!
//! 当状态长时间不变、或同一个故障反复出现时，每个轮询周期都会产生
//! 一模一样的候选通知。去重器只比较完整内容的相等性，部分相似不算
//! 重复。状态只存在内存里，进程重启后从头算。

use tracing::debug;

use crate::error::PollError;

/// 一次通知的逻辑内容：作业名 + 渲染后的文本
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// 作业名（故障报告为空）
    pub subject: String,
    /// 待发送的通知文本
    pub text: String,
}

impl Report {
    /// 状态变更报告
    pub fn new(subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            text: text.into(),
        }
    }

    /// 程序故障报告
    pub fn malfunction(error: &PollError) -> Self {
        Self {
            subject: String::new(),
            text: format!("Program malfunction: {error}."),
        }
    }
}

/// 通知去重器
#[derive(Debug, Default)]
pub struct ReportDeduplicator {
    /// 最近一次尝试投递的报告
    last: Option<Report>,
}

impl ReportDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 判断是否应该发送该报告
    ///
    /// 与最近一次完全相同则抑制；否则把它记为最近一次并放行。
    /// 记录发生在放行时刻，发送本身成败与否不回滚记录。
    pub fn should_send(&mut self, report: &Report) -> bool {
        if self.last.as_ref() == Some(report) {
            debug!(subject = %report.subject, "Report unchanged, send suppressed");
            return false;
        }

        self.last = Some(report.clone());
        true
    }
}
