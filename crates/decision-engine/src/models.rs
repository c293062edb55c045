//! 规则引擎领域模型

use crate::error::Result;
use crate::operators::{ConditionOperator, LogicOperator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 待评估的数据行：字段名到字段值的有序映射，不做持久化
pub type DataRow = Map<String, Value>;

/// 规则集状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetStatus {
    /// 启用，参与评估
    #[default]
    Active,
    /// 停用，评估时跳过
    Inactive,
}

impl RuleSetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for RuleSetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSetStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("无效的规则集状态: {}", other)),
        }
    }
}

/// 规则集：一组规则项的命名集合，归属唯一作者
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub status: RuleSetStatus,
    #[serde(default)]
    pub rules: Vec<RuleItem>,
    pub version: i32,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, created_by: impl Into<String>, rules: Vec<RuleItem>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            status: RuleSetStatus::Active,
            rules,
            version: 1,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RuleSetStatus::Active
    }

    /// 为缺少标识的条件和动作生成 UUID
    ///
    /// 已有标识保持不变，保证跨版本更新时条件可追踪。
    pub fn assign_missing_ids(&mut self) {
        for item in &mut self.rules {
            for condition in &mut item.conditions {
                if condition.id.as_deref().map_or(true, str::is_empty) {
                    condition.id = Some(Uuid::new_v4().to_string());
                }
            }
            for action in &mut item.actions {
                if action.id.as_deref().map_or(true, str::is_empty) {
                    action.id = Some(Uuid::new_v4().to_string());
                }
            }
        }
    }

    /// 从存储的 JSON 文档解析规则项列表
    pub fn parse_rules(value: Value) -> Result<Vec<RuleItem>> {
        Ok(serde_json::from_value(value)?)
    }
}

/// 规则项：单层 AND/OR 条件组加动作列表
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleItem {
    pub name: String,
    /// 条件为空时无条件匹配
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<RuleAction>,
    /// 数值越大优先级越高
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub logic_operator: LogicOperator,
}

impl RuleItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
            actions: Vec::new(),
            priority: 0,
            logic_operator: LogicOperator::default(),
        }
    }
}

/// 条件：针对单个字段的谓词
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub field: String,
    pub operator: ConditionOperator,
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            id: None,
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 动作：规则命中后的输出指令
///
/// 除 `value` 外的字段由调用方自定义，原样保存并返回。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RuleAction {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            id: None,
            value: value.into(),
            extra: Map::new(),
        }
    }
}

/// 单个规则项的命中记录
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatch {
    pub rule_set_id: Uuid,
    pub rule_set_name: String,
    pub rule_item_name: String,
    pub conditions: Vec<Condition>,
    pub actions: Vec<RuleAction>,
    pub priority: i32,
    pub logic_operator: LogicOperator,
}

/// 单个数据行的评估结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowEvaluation {
    /// 原样回传的数据行
    pub row: DataRow,
    /// 命中的规则项，按优先级降序
    pub matched_rules: Vec<RuleMatch>,
    /// 最高优先级命中的首个动作值；命中项无动作时缺省
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_action: Option<Value>,
    /// 是否至少命中一个规则项
    pub success: bool,
}
