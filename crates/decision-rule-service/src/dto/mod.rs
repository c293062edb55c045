//! DTO 模块
//!
//! 包含所有请求和响应的数据传输对象

pub mod request;
pub mod response;

// 重新导出常用类型
pub use request::{ExecuteRequest, SaveRuleSetRequest};
pub use response::{ApiResponse, DeletedResponse, ExecuteResponse, RuleSetDto};
