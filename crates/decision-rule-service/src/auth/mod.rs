//! 认证模块
//!
//! 提供 JWT Token 生成、验证和规则集归属校验功能

mod jwt;
mod policy;

pub use jwt::{Claims, JwtConfig, JwtManager};
pub use policy::OwnershipPolicy;
