//! 请求 DTO 定义
//!
//! 所有 REST API 的请求参数和请求体结构

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use decision_engine::{DataRow, RuleItem, RuleSetStatus};

/// 创建/更新规则集请求
///
/// 创建时 status 缺省为已启用，更新时缺省保留原状态。
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveRuleSetRequest {
    #[validate(length(min = 1, max = 100, message = "规则集名称长度必须在1-100个字符之间"))]
    pub name: String,
    pub status: Option<RuleSetStatus>,
    #[serde(default)]
    pub rules: Vec<RuleItem>,
}

/// 规则执行请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    #[validate(length(min = 1, message = "数据行不能为空"))]
    pub data: Vec<DataRow>,
    /// 限定参与执行的规则集 ID，缺省时使用全部已启用规则集
    pub rule_ids: Option<Vec<Uuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_request_deserialization() {
        let request: SaveRuleSetRequest = serde_json::from_value(json!({
            "name": "审批规则",
            "status": "inactive",
            "rules": [
                {
                    "name": "大额升级",
                    "conditions": [{"field": "amount", "operator": ">", "value": 1000}],
                    "actions": [{"id": "a1", "value": "escalate"}],
                    "priority": 10
                }
            ]
        }))
        .unwrap();

        assert_eq!(request.name, "审批规则");
        assert_eq!(request.status, Some(RuleSetStatus::Inactive));
        assert_eq!(request.rules.len(), 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_save_request_defaults() {
        // status 和 rules 都可以省略
        let request: SaveRuleSetRequest =
            serde_json::from_value(json!({"name": "空规则集"})).unwrap();

        assert!(request.status.is_none());
        assert!(request.rules.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_save_request_rejects_empty_name() {
        let request: SaveRuleSetRequest =
            serde_json::from_value(json!({"name": ""})).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_execute_request_deserialization() {
        let id = Uuid::new_v4();
        let request: ExecuteRequest = serde_json::from_value(json!({
            "data": [{"amount": 1500, "category": "electronics"}],
            "ruleIds": [id]
        }))
        .unwrap();

        assert_eq!(request.data.len(), 1);
        assert_eq!(request.rule_ids, Some(vec![id]));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_execute_request_rejects_empty_data() {
        let request: ExecuteRequest =
            serde_json::from_value(json!({"data": []})).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_execute_request_rule_ids_optional() {
        let request: ExecuteRequest =
            serde_json::from_value(json!({"data": [{"x": 1}]})).unwrap();

        assert!(request.rule_ids.is_none());
    }
}
