//! 规则操作符定义

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 条件操作符
///
/// 文档中以字面量形式存储（`==`、`contains`、`notIn` 等）。
/// 无法识别的操作符保留原文并在评估时视为不匹配，
/// 这样新版本引入的操作符不会导致旧服务解析失败。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionOperator {
    // 宽松比较
    Eq,
    Neq,

    // 数值比较
    Gt,
    Lt,
    Gte,
    Lte,

    // 字符串操作（忽略大小写）
    Contains,
    StartsWith,
    EndsWith,

    // 列表成员检查
    In,
    NotIn,

    // 未识别的操作符，保留原文
    Unsupported(String),
}

impl ConditionOperator {
    /// 解析文档中的操作符字面量
    pub fn from_wire(s: &str) -> Self {
        match s {
            "==" => Self::Eq,
            "!=" => Self::Neq,
            ">" => Self::Gt,
            "<" => Self::Lt,
            ">=" => Self::Gte,
            "<=" => Self::Lte,
            "contains" => Self::Contains,
            "startsWith" => Self::StartsWith,
            "endsWith" => Self::EndsWith,
            "in" => Self::In,
            "notIn" => Self::NotIn,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// 操作符的文档字面量
    pub fn as_str(&self) -> &str {
        match self {
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Contains => "contains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Unsupported(raw) => raw,
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConditionOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConditionOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// 逻辑操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicOperator {
    #[default]
    And,
    Or,
}

impl fmt::Display for LogicOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}
