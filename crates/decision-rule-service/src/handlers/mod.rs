//! HTTP 请求处理器模块
//!
//! 包含所有 REST API 端点的处理器实现

pub mod execute;
pub mod rule_set;

use axum::Extension;

use crate::auth::Claims;
use crate::error::{ApiError, Result};

/// 取出认证中间件注入的 Claims
///
/// 中间件覆盖了所有业务路由，这里的缺失分支只在路由配置错误时触达。
fn require_claims(claims: Option<Extension<Claims>>) -> Result<Claims> {
    claims
        .map(|Extension(claims)| claims)
        .ok_or_else(|| ApiError::Unauthorized("未认证".to_string()))
}
