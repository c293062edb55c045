//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use decision_engine::RuleSet;

/// 规则集仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleSetRepositoryTrait: Send + Sync {
    /// 查询已启用的规则集
    ///
    /// `ids` 为 None 时返回全部已启用规则集；
    /// 为 Some 时仅返回指定 ID 中已启用的部分，未命中的 ID 直接忽略。
    async fn fetch_active(&self, ids: Option<Vec<Uuid>>) -> Result<Vec<RuleSet>>;

    /// 按创建者列出规则集（最新创建的在前）
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<RuleSet>>;

    /// 按 ID 查询单个规则集
    async fn get(&self, id: Uuid) -> Result<Option<RuleSet>>;

    /// 插入新规则集
    async fn insert(&self, rule_set: &RuleSet) -> Result<()>;

    /// 整体替换规则集记录
    async fn update(&self, rule_set: &RuleSet) -> Result<()>;

    /// 删除规则集
    async fn delete(&self, id: Uuid) -> Result<()>;
}
