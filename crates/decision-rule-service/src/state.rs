//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use crate::auth::JwtManager;
use crate::database::Database;
use crate::repository::RuleSetRepository;
use crate::service::{EvaluationService, RuleSetService};

/// Axum 应用共享状态
///
/// 包含数据库连接、JWT 管理器和业务服务，通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    /// 数据库连接池包装
    pub db: Database,
    /// JWT 管理器
    pub jwt_manager: JwtManager,
    /// 规则集管理服务
    pub rule_sets: Arc<RuleSetService<RuleSetRepository>>,
    /// 规则执行服务
    pub evaluation: Arc<EvaluationService<RuleSetRepository>>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(
        db: Database,
        jwt_manager: JwtManager,
        rule_sets: Arc<RuleSetService<RuleSetRepository>>,
        evaluation: Arc<EvaluationService<RuleSetRepository>>,
    ) -> Self {
        Self {
            db,
            jwt_manager,
            rule_sets,
            evaluation,
        }
    }
}
