//! 评审状态表 - 已知状态码到人类可读结论的闭集映射
//!
//! 状态集是封闭的：`approved` / `reviewing` / `rejected`。
//! 任何其他值（包括缺失和空串）都是错误，不会被静默放过。

use serde_json::Value;

use crate::error::PollError;

/// 已知的评审状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    /// 评审通过
    Approved,
    /// 已被评审员接手
    Reviewing,
    /// 评审有意见，需要返工
    Rejected,
}

impl ReviewStatus {
    /// 从 API 状态码解析；未知状态码返回 None
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// 该状态对应的结论文本
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Review complete: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work was taken up for review by the reviewer.",
            Self::Rejected => "Review complete: the reviewer has some remarks.",
        }
    }
}

/// 把一条作业记录渲染成通知文本
///
/// 读取 `homework_name` 和 `status` 两个字段。状态不在状态表中时
/// 返回 `UnknownStatus`，并带上原始状态值便于排查。
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let code = homework
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let status = ReviewStatus::from_code(code)
        .ok_or_else(|| PollError::UnknownStatus(code.to_string()))?;

    Ok(format!(
        "Changed review status for \"{}\". {}",
        name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_statuses_render_name_and_verdict() {
        let cases = [
            (
                "approved",
                "Review complete: the reviewer liked everything. Hooray!",
            ),
            (
                "reviewing",
                "The work was taken up for review by the reviewer.",
            ),
            (
                "rejected",
                "Review complete: the reviewer has some remarks.",
            ),
        ];

        for (code, verdict) in cases {
            let homework = json!({"homework_name": "hw1", "status": code});
            let text = parse_status(&homework).unwrap();
            assert!(text.contains("hw1"));
            assert!(text.contains(verdict));
        }
    }

    #[test]
    fn test_message_format_is_exact() {
        let homework = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&homework).unwrap(),
            "Changed review status for \"hw1\". \
             Review complete: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let homework = json!({"homework_name": "hw2", "status": "pending_review"});
        match parse_status(&homework) {
            Err(PollError::UnknownStatus(code)) => assert_eq!(code, "pending_review"),
            other => panic!("expected UnknownStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_or_empty_status_is_an_error() {
        // 缺失和空串都不是合法状态
        for homework in [
            json!({"homework_name": "hw3"}),
            json!({"homework_name": "hw3", "status": ""}),
        ] {
            assert!(matches!(
                parse_status(&homework),
                Err(PollError::UnknownStatus(_))
            ));
        }
    }

    #[test]
    fn test_from_code_closed_set() {
        assert_eq!(ReviewStatus::from_code("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::from_code("Approved"), None);
        assert_eq!(ReviewStatus::from_code("done"), None);
    }
}
