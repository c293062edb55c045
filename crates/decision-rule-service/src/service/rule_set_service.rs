//! 规则集管理服务
//!
//! 处理规则集的创建、更新、删除和查询，包括：
//! - 归属校验（仅创建者可修改或删除）
//! - 版本号递增（每次更新 +1）
//! - 条件与动作 ID 的自动补全

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::OwnershipPolicy;
use crate::error::{ApiError, Result};
use crate::repository::RuleSetRepositoryTrait;
use decision_engine::{RuleItem, RuleSet, RuleSetStatus};

/// 规则集管理服务
///
/// 所有写操作先做归属校验，校验失败时数据库记录保持不变。
pub struct RuleSetService<R>
where
    R: RuleSetRepositoryTrait,
{
    repo: Arc<R>,
    policy: OwnershipPolicy,
}

impl<R> RuleSetService<R>
where
    R: RuleSetRepositoryTrait,
{
    pub fn new(repo: Arc<R>, policy: OwnershipPolicy) -> Self {
        Self { repo, policy }
    }

    /// 创建规则集
    ///
    /// 新规则集版本号固定为 1，状态缺省为已启用，
    /// 缺失的条件/动作 ID 在持久化前补全。
    #[instrument(skip(self, rules), fields(owner = %owner))]
    pub async fn create(
        &self,
        owner: &str,
        name: String,
        status: Option<RuleSetStatus>,
        rules: Vec<RuleItem>,
    ) -> Result<RuleSet> {
        let mut rule_set = RuleSet::new(name, owner.to_string(), rules);
        if let Some(status) = status {
            rule_set.status = status;
        }
        rule_set.assign_missing_ids();

        self.repo.insert(&rule_set).await?;

        info!(
            rule_set_id = %rule_set.id,
            rule_count = rule_set.rules.len(),
            "Rule set created"
        );

        Ok(rule_set)
    }

    /// 更新规则集
    ///
    /// 名称与规则项整体替换，状态缺省时保留原值；
    /// 版本号 +1，updated_at 重新盖章，id/created_by/created_at 不变。
    #[instrument(skip(self, rules), fields(rule_set_id = %id, caller = %caller))]
    pub async fn update(
        &self,
        caller: &str,
        id: Uuid,
        name: String,
        status: Option<RuleSetStatus>,
        rules: Vec<RuleItem>,
    ) -> Result<RuleSet> {
        let mut rule_set = self
            .repo
            .get(id)
            .await?
            .ok_or(ApiError::RuleSetNotFound(id))?;

        if !self.policy.allows(caller, &rule_set.created_by) {
            return Err(ApiError::Forbidden("只有创建者可以修改规则集".to_string()));
        }

        rule_set.name = name;
        if let Some(status) = status {
            rule_set.status = status;
        }
        rule_set.rules = rules;
        rule_set.version += 1;
        rule_set.updated_at = Utc::now();
        rule_set.assign_missing_ids();

        self.repo.update(&rule_set).await?;

        info!(version = rule_set.version, "Rule set updated");

        Ok(rule_set)
    }

    /// 删除规则集
    #[instrument(skip(self), fields(rule_set_id = %id, caller = %caller))]
    pub async fn delete(&self, caller: &str, id: Uuid) -> Result<()> {
        let rule_set = self
            .repo
            .get(id)
            .await?
            .ok_or(ApiError::RuleSetNotFound(id))?;

        if !self.policy.allows(caller, &rule_set.created_by) {
            return Err(ApiError::Forbidden("只有创建者可以删除规则集".to_string()));
        }

        self.repo.delete(id).await?;

        info!("Rule set deleted");

        Ok(())
    }

    /// 列出调用方创建的全部规则集
    #[instrument(skip(self), fields(owner = %owner))]
    pub async fn list(&self, owner: &str) -> Result<Vec<RuleSet>> {
        self.repo.list_by_owner(owner).await
    }

    /// 查询调用方创建的单个规则集
    ///
    /// 他人创建的规则集按不存在处理，避免泄露 ID 的存在性。
    #[instrument(skip(self), fields(rule_set_id = %id, caller = %caller))]
    pub async fn get_owned(&self, caller: &str, id: Uuid) -> Result<RuleSet> {
        let rule_set = self
            .repo
            .get(id)
            .await?
            .ok_or(ApiError::RuleSetNotFound(id))?;

        if !self.policy.allows(caller, &rule_set.created_by) {
            return Err(ApiError::RuleSetNotFound(id));
        }

        Ok(rule_set)
    }
}
