//! 服务层
//!
//! 实现规则集管理与规则执行的业务逻辑，协调仓储层与规则引擎。
//!
//! ## 模块结构
//!
//! - `rule_set_service`: 规则集 CRUD 与归属校验
//! - `evaluation_service`: 规则执行编排

mod evaluation_service;
mod rule_set_service;

pub use evaluation_service::EvaluationService;
pub use rule_set_service::RuleSetService;
