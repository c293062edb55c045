//! 规则项匹配
//!
//! 将条件评估组合成规则项级别的匹配判定。单个条件评估失败
//! 只使该条件不匹配，不会中断整行或整批的评估。

use crate::evaluator::ConditionEvaluator;
use crate::models::{Condition, DataRow, RuleItem};
use crate::operators::LogicOperator;
use tracing::debug;

/// 规则项匹配器
pub struct RuleMatcher;

impl RuleMatcher {
    /// 判定规则项是否命中数据行
    ///
    /// 条件列表为空时无条件命中，AND/OR 均如此。
    pub fn matches(item: &RuleItem, row: &DataRow) -> bool {
        if item.conditions.is_empty() {
            return true;
        }

        match item.logic_operator {
            LogicOperator::And => item
                .conditions
                .iter()
                .all(|condition| Self::condition_matches(condition, row)),
            LogicOperator::Or => item
                .conditions
                .iter()
                .any(|condition| Self::condition_matches(condition, row)),
        }
    }

    fn condition_matches(condition: &Condition, row: &DataRow) -> bool {
        let field_value = row.get(&condition.field);

        ConditionEvaluator::evaluate(field_value, &condition.operator, &condition.value)
            .unwrap_or_else(|err| {
                debug!(
                    field = %condition.field,
                    operator = %condition.operator,
                    error = %err,
                    "Condition evaluation failed, treated as non-match"
                );
                false
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::ConditionOperator;
    use serde_json::{json, Value};

    fn row(value: Value) -> DataRow {
        value.as_object().cloned().unwrap()
    }

    fn item_with(logic_operator: LogicOperator, conditions: Vec<Condition>) -> RuleItem {
        RuleItem {
            conditions,
            logic_operator,
            ..RuleItem::new("test")
        }
    }

    #[test]
    fn test_empty_conditions_always_match() {
        let data = row(json!({"amount": 100}));
        for logic_operator in [LogicOperator::And, LogicOperator::Or] {
            let item = item_with(logic_operator, vec![]);
            assert!(RuleMatcher::matches(&item, &data));
        }
    }

    #[test]
    fn test_and_requires_all() {
        let data = row(json!({"amount": 1500, "status": "open"}));

        let both = item_with(
            LogicOperator::And,
            vec![
                Condition::new("amount", ConditionOperator::Gt, 1000),
                Condition::new("status", ConditionOperator::Eq, "open"),
            ],
        );
        assert!(RuleMatcher::matches(&both, &data));

        let one_fails = item_with(
            LogicOperator::And,
            vec![
                Condition::new("amount", ConditionOperator::Gt, 1000),
                Condition::new("status", ConditionOperator::Eq, "closed"),
            ],
        );
        assert!(!RuleMatcher::matches(&one_fails, &data));
    }

    #[test]
    fn test_or_requires_any() {
        let data = row(json!({"amount": 500, "status": "open"}));

        let one_holds = item_with(
            LogicOperator::Or,
            vec![
                Condition::new("amount", ConditionOperator::Gt, 1000),
                Condition::new("status", ConditionOperator::Eq, "open"),
            ],
        );
        assert!(RuleMatcher::matches(&one_holds, &data));

        let none_hold = item_with(
            LogicOperator::Or,
            vec![
                Condition::new("amount", ConditionOperator::Gt, 1000),
                Condition::new("status", ConditionOperator::Eq, "closed"),
            ],
        );
        assert!(!RuleMatcher::matches(&none_hold, &data));
    }

    #[test]
    fn test_unsupported_operator_counts_as_non_match() {
        let data = row(json!({"email": "user@example.com"}));

        // AND 中未识别操作符导致整项不命中
        let and_item = item_with(
            LogicOperator::And,
            vec![Condition::new(
                "email",
                ConditionOperator::Unsupported("regex".to_string()),
                ".*",
            )],
        );
        assert!(!RuleMatcher::matches(&and_item, &data));

        // OR 中其余条件仍可命中
        let or_item = item_with(
            LogicOperator::Or,
            vec![
                Condition::new("email", ConditionOperator::Unsupported("regex".to_string()), ".*"),
                Condition::new("email", ConditionOperator::Contains, "example"),
            ],
        );
        assert!(RuleMatcher::matches(&or_item, &data));
    }
}
