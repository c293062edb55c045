//! 决策规则引擎核心
//!
//! 提供无状态的规则评估能力，支持：
//! - 规则集/规则项/条件/动作的 JSON 领域模型
//! - 跨类型宽松比较（数值、字符串、布尔、列表）
//! - AND/OR 单层逻辑组合与短路求值
//! - 按优先级仲裁的批量数据行评估

pub mod error;
pub mod evaluator;
pub mod executor;
pub mod matcher;
pub mod models;
pub mod operators;
mod value;

pub use error::{EngineError, Result};
pub use evaluator::ConditionEvaluator;
pub use executor::{RuleExecutor, NO_MATCH};
pub use matcher::RuleMatcher;
pub use models::{
    Condition, DataRow, RowEvaluation, RuleAction, RuleItem, RuleMatch, RuleSet, RuleSetStatus,
};
pub use operators::{ConditionOperator, LogicOperator};
