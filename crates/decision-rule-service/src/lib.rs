//! 决策规则服务
//!
//! 提供规则集管理与批量数据评估的 REST API。
//!
//! ## 核心功能
//!
//! - **规则集管理**：规则集的 CRUD 操作，包括条件、动作、优先级配置
//! - **规则执行**：接收批量数据行，对所有已启用规则集进行匹配评估
//! - **归属控制**：规则集归创建者所有，仅创建者可修改或删除
//! - **版本追踪**：每次更新自动递增规则集版本号
//!
//! ## 模块结构
//!
//! - `auth`: JWT 认证与归属策略
//! - `config`: 分层配置加载
//! - `database`: PostgreSQL 连接池管理
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `middleware`: 认证中间件
//! - `observability`: 日志与追踪初始化
//! - `repository`: 规则集持久化
//! - `routes`: 路由配置
//! - `service`: 业务逻辑服务
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据库：sqlx + PostgreSQL
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod auth;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

// 重新导出核心类型
pub use auth::{Claims, JwtConfig, JwtManager, OwnershipPolicy};
pub use config::AppConfig;
pub use database::Database;
pub use dto::{
    ApiResponse, DeletedResponse, ExecuteRequest, ExecuteResponse, RuleSetDto, SaveRuleSetRequest,
};
pub use error::{ApiError, Result};
pub use state::AppState;

// 从 decision-engine 重新导出核心模型
// 便于调用方直接使用规则与评估结果类型
pub use decision_engine::{
    Condition, ConditionOperator, DataRow, LogicOperator, RowEvaluation, RuleAction, RuleItem,
    RuleMatch, RuleSet, RuleSetStatus,
};
