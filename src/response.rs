//! 响应校验 - 检查 API 响应的结构并提取作业列表
//!
//! API 响应是不可信输入，按部就班地校验：必须是非空对象，必须带
//! `homeworks` 键，其值必须是数组。`current_date` 不是必需键。

use serde_json::Value;

use crate::error::PollError;

/// 校验 API 响应并返回 `homeworks` 数组
///
/// 校验顺序固定：对象 → 非空 → 有 `homeworks` → 是数组。
/// 任何一步失败都带着对应的错误类别返回，数组内容原样透传。
pub fn check_response(response: &Value) -> Result<&Vec<Value>, PollError> {
    let map = response
        .as_object()
        .ok_or(PollError::MalformedResponse("response is not a JSON object"))?;

    if map.is_empty() {
        return Err(PollError::EmptyResponse);
    }

    let homeworks = map
        .get("homeworks")
        .ok_or(PollError::MissingField("homeworks"))?;

    homeworks
        .as_array()
        .ok_or(PollError::MalformedResponse("\"homeworks\" is not an array"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_response_returns_homeworks_unchanged() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1700000000,
        });
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["homework_name"], "hw1");
    }

    #[test]
    fn test_current_date_is_not_required() {
        let response = json!({"homeworks": []});
        assert!(check_response(&response).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_response_is_malformed() {
        for response in [json!([1, 2]), json!("text"), json!(42), json!(null)] {
            assert!(matches!(
                check_response(&response),
                Err(PollError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn test_empty_object_is_rejected() {
        assert!(matches!(
            check_response(&json!({})),
            Err(PollError::EmptyResponse)
        ));
    }

    #[test]
    fn test_missing_homeworks_key() {
        let response = json!({"current_date": 1700000000});
        assert!(matches!(
            check_response(&response),
            Err(PollError::MissingField("homeworks"))
        ));
    }

    #[test]
    fn test_homeworks_must_be_an_array() {
        for homeworks in [json!("hw1"), json!(7), json!({"homework_name": "hw1"})] {
            let response = json!({"homeworks": homeworks});
            assert!(matches!(
                check_response(&response),
                Err(PollError::MalformedResponse(_))
            ));
        }
    }
}
