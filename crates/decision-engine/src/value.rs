//! 值视图与宽松比较
//!
//! 跨类型比较规则集中在这里，行为只由下面的转换表决定：
//!
//! | 原值            | 数值视图        | 文本视图          |
//! |-----------------|-----------------|-------------------|
//! | Number          | f64             | 十进制文本        |
//! | String          | trim 后 parse   | 原文              |
//! | Bool            | 1.0 / 0.0       | "true" / "false"  |
//! | Null / 字段缺失 | 无              | ""                |
//! | Array / Object  | 无              | 紧凑 JSON         |

use serde_json::Value;

/// 数值视图
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// 文本视图
pub(crate) fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// 宽松相等
///
/// 同类型直接比较；类型不同时双方都能取数值视图才按数值比较，
/// 否则不相等。缺失字段只等于 null。
pub(crate) fn loose_eq(field_value: Option<&Value>, expected: &Value) -> bool {
    match (field_value, expected) {
        (None | Some(Value::Null), Value::Null) => true,
        (None | Some(Value::Null), _) | (_, Value::Null) => false,
        (Some(Value::String(a)), Value::String(b)) => a == b,
        (Some(Value::Bool(a)), Value::Bool(b)) => a == b,
        (Some(Value::Array(a)), Value::Array(b)) => a == b,
        (Some(Value::Object(a)), Value::Object(b)) => a == b,
        (Some(a), b) => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => (x - y).abs() < f64::EPSILON,
            _ => false,
        },
    }
}
