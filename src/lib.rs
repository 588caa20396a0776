//! Homework Review Monitor - 轮询作业评审 API 并推送 Telegram 通知

pub mod api;
pub mod config;
pub mod error;
pub mod monitor;
pub mod notify;
pub mod report;
pub mod response;
pub mod status;

pub use api::{HomeworkSource, PracticumClient, ENDPOINT};
pub use config::Config;
pub use error::{NotifyError, PollError};
pub use monitor::Monitor;
pub use notify::{NotifyChannel, TelegramSender};
pub use report::{Report, ReportDeduplicator};
pub use response::check_response;
pub use status::{parse_status, ReviewStatus};
