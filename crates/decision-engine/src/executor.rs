//! 批量评估执行器
//!
//! 对每个数据行扫描全部启用规则集，收集命中项并按优先级仲裁。
//! 执行器无状态、无 I/O，可在并发请求间安全复用。

use crate::matcher::RuleMatcher;
use crate::models::{DataRow, RowEvaluation, RuleMatch, RuleSet};
use serde_json::Value;

/// 无任何规则项命中时的兜底动作值
pub const NO_MATCH: &str = "No match";

/// 批量评估执行器
pub struct RuleExecutor;

impl RuleExecutor {
    /// 评估一批数据行，结果与输入同序
    pub fn evaluate_batch(rule_sets: &[RuleSet], rows: Vec<DataRow>) -> Vec<RowEvaluation> {
        rows.into_iter()
            .map(|row| Self::evaluate_row(rule_sets, row))
            .collect()
    }

    /// 评估单个数据行
    pub fn evaluate_row(rule_sets: &[RuleSet], row: DataRow) -> RowEvaluation {
        let mut matched_rules = Vec::new();

        for rule_set in rule_sets.iter().filter(|rs| rs.is_active()) {
            for item in &rule_set.rules {
                if RuleMatcher::matches(item, &row) {
                    matched_rules.push(RuleMatch {
                        rule_set_id: rule_set.id,
                        rule_set_name: rule_set.name.clone(),
                        rule_item_name: item.name.clone(),
                        conditions: item.conditions.clone(),
                        actions: item.actions.clone(),
                        priority: item.priority,
                        logic_operator: item.logic_operator,
                    });
                }
            }
        }

        // 稳定排序：优先级相同的命中项保持扫描顺序，先到者胜出
        matched_rules.sort_by(|a, b| b.priority.cmp(&a.priority));

        let resolved_action = match matched_rules.first() {
            Some(winner) => winner.actions.first().map(|action| action.value.clone()),
            None => Some(Value::String(NO_MATCH.to_string())),
        };
        let success = !matched_rules.is_empty();

        RowEvaluation {
            row,
            matched_rules,
            resolved_action,
            success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, RuleAction, RuleItem, RuleSetStatus};
    use crate::operators::{ConditionOperator, LogicOperator};
    use serde_json::json;

    fn row(value: serde_json::Value) -> DataRow {
        value.as_object().cloned().unwrap()
    }

    fn item(name: &str, priority: i32, conditions: Vec<Condition>, action: &str) -> RuleItem {
        RuleItem {
            conditions,
            actions: vec![RuleAction::new(action)],
            priority,
            logic_operator: LogicOperator::And,
            ..RuleItem::new(name)
        }
    }

    #[test]
    fn test_highest_priority_action_wins() {
        let rule_set = RuleSet::new(
            "routing",
            "alice@example.com",
            vec![
                item(
                    "low",
                    5,
                    vec![Condition::new("amount", ConditionOperator::Gt, 0)],
                    "review",
                ),
                item(
                    "high",
                    10,
                    vec![Condition::new("amount", ConditionOperator::Gt, 1000)],
                    "escalate",
                ),
            ],
        );

        let result = RuleExecutor::evaluate_row(&[rule_set], row(json!({"amount": 1500})));

        assert!(result.success);
        assert_eq!(result.matched_rules.len(), 2);
        assert_eq!(result.matched_rules[0].rule_item_name, "high");
        assert_eq!(result.resolved_action, Some(json!("escalate")));
    }

    #[test]
    fn test_equal_priority_keeps_scan_order() {
        let rule_set = RuleSet::new(
            "ties",
            "alice@example.com",
            vec![
                item("first", 7, vec![], "a"),
                item("second", 7, vec![], "b"),
                item("third", 9, vec![], "c"),
            ],
        );

        let result = RuleExecutor::evaluate_row(&[rule_set], row(json!({})));

        let names: Vec<&str> = result
            .matched_rules
            .iter()
            .map(|m| m.rule_item_name.as_str())
            .collect();
        assert_eq!(names, vec!["third", "first", "second"]);
        assert_eq!(result.resolved_action, Some(json!("c")));
    }

    #[test]
    fn test_no_match_resolves_fallback_literal() {
        let rule_set = RuleSet::new(
            "routing",
            "alice@example.com",
            vec![item(
                "high",
                10,
                vec![Condition::new("amount", ConditionOperator::Gt, 1000)],
                "escalate",
            )],
        );

        let result = RuleExecutor::evaluate_row(&[rule_set], row(json!({"amount": 500})));

        assert!(!result.success);
        assert!(result.matched_rules.is_empty());
        assert_eq!(result.resolved_action, Some(json!(NO_MATCH)));
    }

    #[test]
    fn test_winner_without_actions_resolves_none() {
        let mut no_action = RuleItem::new("bare");
        no_action.priority = 10;
        let rule_set = RuleSet::new("routing", "alice@example.com", vec![no_action]);

        let result = RuleExecutor::evaluate_row(&[rule_set], row(json!({})));

        assert!(result.success);
        assert_eq!(result.resolved_action, None);
    }

    #[test]
    fn test_inactive_rule_sets_are_skipped() {
        let mut inactive = RuleSet::new(
            "disabled",
            "alice@example.com",
            vec![item("always", 100, vec![], "never")],
        );
        inactive.status = RuleSetStatus::Inactive;

        let result = RuleExecutor::evaluate_row(&[inactive], row(json!({})));

        assert!(!result.success);
        assert_eq!(result.resolved_action, Some(json!(NO_MATCH)));
    }

    #[test]
    fn test_batch_preserves_row_order() {
        let rule_set = RuleSet::new(
            "routing",
            "alice@example.com",
            vec![item(
                "high",
                10,
                vec![Condition::new("amount", ConditionOperator::Gt, 1000)],
                "escalate",
            )],
        );

        let rows = vec![
            row(json!({"amount": 1500})),
            row(json!({"amount": 500})),
            row(json!({"amount": 2000})),
        ];
        let results = RuleExecutor::evaluate_batch(&[rule_set], rows);

        assert_eq!(results.len(), 3);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[2].success);
        assert_eq!(results[1].row.get("amount"), Some(&json!(500)));
    }
}
