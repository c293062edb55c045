//! 规则引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("不支持的操作符: {0}")]
    UnsupportedOperator(String),

    #[error("规则文档解析失败: {0}")]
    InvalidRuleDocument(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
