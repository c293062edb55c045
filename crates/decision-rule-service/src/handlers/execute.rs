//! 规则执行 API 处理器

use axum::{extract::State, Extension, Json};
use validator::Validate;

use super::require_claims;
use crate::{
    auth::Claims,
    dto::{ApiResponse, ExecuteRequest, ExecuteResponse},
    error::Result,
    state::AppState,
};

/// 对一批数据行执行规则
///
/// POST /api/rules/execute
///
/// 执行只要求认证，不做归属限制：任何用户都可以对已启用的规则集求值。
pub async fn execute_rules(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    Json(req): Json<ExecuteRequest>,
) -> Result<Json<ApiResponse<ExecuteResponse>>> {
    require_claims(claims)?;
    req.validate()?;

    let results = state.evaluation.execute(req.data, req.rule_ids).await?;

    Ok(Json(ApiResponse::success(ExecuteResponse { results })))
}
