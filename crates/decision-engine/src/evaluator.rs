//! 条件评估器
//!
//! 实现各操作符对单个字段值的评估逻辑，比较规则见 `value` 模块的转换表。

use crate::error::{EngineError, Result};
use crate::operators::ConditionOperator;
use crate::value;
use serde_json::Value;

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 评估单个条件
    ///
    /// # Arguments
    /// * `field_value` - 从数据行中取出的字段值，字段缺失时为 None
    /// * `operator` - 操作符
    /// * `comparand` - 条件中定义的比较值
    pub fn evaluate(
        field_value: Option<&Value>,
        operator: &ConditionOperator,
        comparand: &Value,
    ) -> Result<bool> {
        match operator {
            ConditionOperator::Eq => Ok(value::loose_eq(field_value, comparand)),
            ConditionOperator::Neq => Ok(!value::loose_eq(field_value, comparand)),
            ConditionOperator::Gt => Ok(Self::compare(field_value, comparand, |a, b| a > b)),
            ConditionOperator::Lt => Ok(Self::compare(field_value, comparand, |a, b| a < b)),
            ConditionOperator::Gte => Ok(Self::compare(field_value, comparand, |a, b| a >= b)),
            ConditionOperator::Lte => Ok(Self::compare(field_value, comparand, |a, b| a <= b)),
            ConditionOperator::Contains => {
                Ok(Self::text_op(field_value, comparand, |s, n| s.contains(n)))
            }
            ConditionOperator::StartsWith => {
                Ok(Self::text_op(field_value, comparand, |s, p| s.starts_with(p)))
            }
            ConditionOperator::EndsWith => {
                Ok(Self::text_op(field_value, comparand, |s, x| s.ends_with(x)))
            }
            ConditionOperator::In => Ok(Self::in_list(field_value, comparand)),
            ConditionOperator::NotIn => Ok(!Self::in_list(field_value, comparand)),
            ConditionOperator::Unsupported(raw) => {
                Err(EngineError::UnsupportedOperator(raw.clone()))
            }
        }
    }

    /// 数值比较，任一侧取不到数值视图时不匹配
    fn compare<F>(field_value: Option<&Value>, comparand: &Value, cmp: F) -> bool
    where
        F: Fn(f64, f64) -> bool,
    {
        match (
            field_value.and_then(value::as_number),
            value::as_number(comparand),
        ) {
            (Some(a), Some(b)) => cmp(a, b),
            _ => false,
        }
    }

    /// 字符串操作，双方取文本视图并统一小写
    fn text_op<F>(field_value: Option<&Value>, comparand: &Value, op: F) -> bool
    where
        F: Fn(&str, &str) -> bool,
    {
        let haystack = value::as_text(field_value).to_lowercase();
        let needle = value::as_text(Some(comparand)).to_lowercase();
        op(&haystack, &needle)
    }

    /// 列表成员检查，标量比较值按单元素列表处理
    fn in_list(field_value: Option<&Value>, comparand: &Value) -> bool {
        let candidates = match comparand {
            Value::Array(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        candidates
            .iter()
            .any(|candidate| value::loose_eq(field_value, candidate))
    }
}
