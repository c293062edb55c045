//! 规则执行服务
//!
//! 加载已启用的规则集并对数据行批量求值

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::repository::RuleSetRepositoryTrait;
use decision_engine::{DataRow, RowEvaluation, RuleExecutor};

/// 规则执行服务
///
/// 执行不做归属限制，任何认证用户都可以对已启用的规则集求值。
pub struct EvaluationService<R>
where
    R: RuleSetRepositoryTrait,
{
    repo: Arc<R>,
}

impl<R> EvaluationService<R>
where
    R: RuleSetRepositoryTrait,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 对一批数据行执行规则
    ///
    /// `rule_ids` 为 None 时使用全部已启用规则集；
    /// 指定时只加载其中已启用的部分，未命中的 ID 被忽略。
    /// 加载结果为空时整个请求失败，区别于单行的未命中。
    #[instrument(skip(self, rows), fields(row_count = rows.len()))]
    pub async fn execute(
        &self,
        rows: Vec<DataRow>,
        rule_ids: Option<Vec<Uuid>>,
    ) -> Result<Vec<RowEvaluation>> {
        let rule_sets = self.repo.fetch_active(rule_ids).await?;

        if rule_sets.is_empty() {
            return Err(ApiError::NoActiveRules);
        }

        info!(rule_set_count = rule_sets.len(), "Executing rule sets");

        Ok(RuleExecutor::evaluate_batch(&rule_sets, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockRuleSetRepositoryTrait;
    use decision_engine::{Condition, ConditionOperator, RuleAction, RuleItem, RuleSet};
    use serde_json::json;

    fn active_rule_set() -> RuleSet {
        RuleSet::new(
            "审批规则".to_string(),
            "alice@example.com".to_string(),
            vec![RuleItem {
                conditions: vec![Condition::new("amount", ConditionOperator::Gt, json!(1000))],
                actions: vec![RuleAction::new(json!("escalate"))],
                priority: 10,
                ..RuleItem::new("大额升级")
            }],
        )
    }

    fn row(value: serde_json::Value) -> DataRow {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_execute_returns_per_row_results() {
        let mut repo = MockRuleSetRepositoryTrait::new();
        repo.expect_fetch_active()
            .times(1)
            .returning(|_| Ok(vec![active_rule_set()]));

        let service = EvaluationService::new(Arc::new(repo));
        let results = service
            .execute(
                vec![row(json!({"amount": 5000})), row(json!({"amount": 10}))],
                None,
            )
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].success);
        assert_eq!(results[0].resolved_action, Some(json!("escalate")));
        assert!(!results[1].success);
    }

    #[tokio::test]
    async fn test_execute_fails_when_nothing_active() {
        let mut repo = MockRuleSetRepositoryTrait::new();
        repo.expect_fetch_active().returning(|_| Ok(vec![]));

        let service = EvaluationService::new(Arc::new(repo));
        let result = service.execute(vec![row(json!({"amount": 1}))], None).await;

        assert!(matches!(result, Err(ApiError::NoActiveRules)));
    }

    #[tokio::test]
    async fn test_execute_passes_requested_ids_to_repository() {
        let wanted = vec![Uuid::new_v4(), Uuid::new_v4()];
        let expected = wanted.clone();

        let mut repo = MockRuleSetRepositoryTrait::new();
        repo.expect_fetch_active()
            .withf(move |ids: &Option<Vec<Uuid>>| ids.as_deref() == Some(&expected[..]))
            .times(1)
            .returning(|_| Ok(vec![active_rule_set()]));

        let service = EvaluationService::new(Arc::new(repo));
        service
            .execute(vec![row(json!({"amount": 2000}))], Some(wanted))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_execute_surfaces_repository_errors() {
        let mut repo = MockRuleSetRepositoryTrait::new();
        repo.expect_fetch_active()
            .returning(|_| Err(ApiError::Internal("连接池耗尽".to_string())));

        let service = EvaluationService::new(Arc::new(repo));
        let result = service.execute(vec![row(json!({}))], None).await;

        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
