//! 决策规则服务
//!
//! 提供规则集管理与批量数据评估的 REST API。

use std::sync::Arc;

use axum::{Json, Router, http::HeaderValue, middleware, routing::get};
use decision_rule_service::{
    auth::{JwtConfig, JwtManager, OwnershipPolicy},
    config::AppConfig,
    database::Database,
    middleware::auth_middleware,
    observability,
    repository::RuleSetRepository,
    routes,
    service::{EvaluationService, RuleSetService},
    state::AppState,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：从 config/{service_name}.toml 加载，包含可观测性配置
    let config = AppConfig::load("decision-rule-service").unwrap_or_default();

    observability::init(&config.observability)?;

    info!("Starting decision-rule-service on {}", config.server_addr());

    // 初始化基础设施
    let db = Database::connect(&config.database).await?;
    db.run_migrations().await?;

    // JWT 密钥配置：生产环境必须通过环境变量注入，开发环境使用默认值
    let jwt_secret = std::env::var("DECISION_JWT_SECRET").unwrap_or_else(|_| {
        let default_secret = "decision-rule-secret-key-change-in-production".to_string();
        if std::env::var("DECISION_ENV").unwrap_or_default() == "production" {
            panic!("DECISION_JWT_SECRET must be set in production environment");
        }
        warn!("Using default JWT secret - set DECISION_JWT_SECRET for production");
        default_secret
    });

    let jwt_expires = std::env::var("DECISION_JWT_EXPIRES_SECS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(86400);

    let jwt_config = JwtConfig {
        secret: jwt_secret,
        expires_in_secs: jwt_expires,
        issuer: "decision-rule-service".to_string(),
    };
    let jwt_manager = JwtManager::new(jwt_config);

    // 组装仓储与业务服务：RuleSetRepository → RuleSetService / EvaluationService
    let repo = Arc::new(RuleSetRepository::new(db.pool().clone()));
    let rule_sets = Arc::new(RuleSetService::new(repo.clone(), OwnershipPolicy::new()));
    let evaluation = Arc::new(EvaluationService::new(repo));

    let state = AppState::new(db.clone(), jwt_manager, rule_sets, evaluation);

    // CORS 配置：通过 DECISION_CORS_ORIGINS 环境变量控制允许的来源
    // 默认允许本地开发地址，生产环境应设置为实际域名
    let allowed_origins = std::env::var("DECISION_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    let cors = if allowed_origins == "*" {
        // 生产环境使用通配符 CORS 是严重的安全隐患，可能导致跨站请求伪造
        if std::env::var("DECISION_ENV").unwrap_or_default() == "production" {
            warn!("DECISION_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        info!("CORS allowed_origins: * (all origins)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        info!("CORS allowed_origins: {}", allowed_origins);
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .nest("/api/rules", routes::api_routes())
        .route("/health", get(health_check))
        .route(
            "/ready",
            get({
                let db_for_ready = db;
                move || readiness_check(db_for_ready.clone())
            }),
        )
        .layer(cors)
        // 认证中间件：验证 JWT Token
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM（K8s 停止 Pod）或 Ctrl+C 时，
    // 停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// K8s 通过 SIGTERM 通知 Pod 停止；本地开发通过 Ctrl+C。
/// 收到任一信号后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "decision-rule-service"
    }))
}

/// 就绪探针：检查数据库连接是否可用
///
/// K8s 就绪探针失败时会将 Pod 从 Service 端点移除，
/// 避免将流量路由到无法正常处理请求的实例。
async fn readiness_check(db: Database) -> Json<serde_json::Value> {
    let db_ok = db.health_check().await.is_ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": "decision-rule-service",
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
