//! 数据库仓储层
//!
//! 提供规则集的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑
//! - 使用 SQLx 进行类型安全的数据库操作
//! - 定义 trait 接口以支持 mock 测试

mod rule_set_repo;
mod traits;

pub use rule_set_repo::RuleSetRepository;
pub use traits::*;
