//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{handlers, state::AppState};

/// 构建规则集管理路由
///
/// 包含规则集的 CRUD 操作路由
fn rule_set_routes() -> Router<AppState> {
    Router::new()
        .route("/sets", post(handlers::rule_set::create_rule_set))
        .route("/sets", get(handlers::rule_set::list_rule_sets))
        .route("/sets/{id}", get(handlers::rule_set::get_rule_set))
        .route("/sets/{id}", put(handlers::rule_set::update_rule_set))
        .route("/sets/{id}", delete(handlers::rule_set::delete_rule_set))
}

/// 构建规则执行路由
fn execution_routes() -> Router<AppState> {
    Router::new().route("/execute", post(handlers::execute::execute_rules))
}

/// 构建完整的 API 路由
///
/// 返回所有规则服务 API 路由（不含前缀，由调用方在 main.rs 中挂载）
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(rule_set_routes())
        .merge(execution_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_construction() {
        let _rule_set = rule_set_routes();
        let _execution = execution_routes();
        let _api = api_routes();
    }
}
