//! 中间件模块
//!
//! 提供 JWT 认证中间件

mod auth;

pub use auth::auth_middleware;
