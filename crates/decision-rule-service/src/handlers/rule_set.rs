//! 规则集管理 API 处理器
//!
//! 实现规则集的 CRUD 操作。
//! 所有操作都以认证用户的邮箱作为归属身份，修改与删除仅限创建者。

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use super::require_claims;
use crate::{
    auth::Claims,
    dto::{ApiResponse, DeletedResponse, RuleSetDto, SaveRuleSetRequest},
    error::Result,
    state::AppState,
};

/// 创建规则集
///
/// POST /api/rules/sets
pub async fn create_rule_set(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    Json(req): Json<SaveRuleSetRequest>,
) -> Result<Json<ApiResponse<RuleSetDto>>> {
    let claims = require_claims(claims)?;
    req.validate()?;

    let rule_set = state
        .rule_sets
        .create(&claims.email, req.name, req.status, req.rules)
        .await?;

    Ok(Json(ApiResponse::success(rule_set.into())))
}

/// 列出当前用户的规则集
///
/// GET /api/rules/sets
pub async fn list_rule_sets(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
) -> Result<Json<ApiResponse<Vec<RuleSetDto>>>> {
    let claims = require_claims(claims)?;

    let rule_sets = state.rule_sets.list(&claims.email).await?;

    let items: Vec<RuleSetDto> = rule_sets.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(items)))
}

/// 获取规则集详情
///
/// GET /api/rules/sets/{id}
pub async fn get_rule_set(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RuleSetDto>>> {
    let claims = require_claims(claims)?;

    let rule_set = state.rule_sets.get_owned(&claims.email, id).await?;

    Ok(Json(ApiResponse::success(rule_set.into())))
}

/// 更新规则集
///
/// PUT /api/rules/sets/{id}
pub async fn update_rule_set(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveRuleSetRequest>,
) -> Result<Json<ApiResponse<RuleSetDto>>> {
    let claims = require_claims(claims)?;
    req.validate()?;

    let rule_set = state
        .rule_sets
        .update(&claims.email, id, req.name, req.status, req.rules)
        .await?;

    Ok(Json(ApiResponse::success(rule_set.into())))
}

/// 删除规则集
///
/// DELETE /api/rules/sets/{id}
pub async fn delete_rule_set(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeletedResponse>>> {
    let claims = require_claims(claims)?;

    state.rule_sets.delete(&claims.email, id).await?;

    Ok(Json(ApiResponse::success(DeletedResponse::success())))
}
