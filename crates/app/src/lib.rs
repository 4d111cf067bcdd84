//! Fixline application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::Router;
use fixline_auth::AuthConfig;
use fixline_common::Config;
use fixline_llm::{LlmConfig, LlmServiceFactory};
use fixline_messaging::{MessagingRepositories, MessagingState};
use fixline_orders::{OrdersRepositories, OrdersState};
use fixline_profiles::{ProfileRepositories, ProfilesState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: std::env::var("JWT_ISSUER").ok(),
        audience: std::env::var("JWT_AUDIENCE").ok(),
    };

    // One configured generation backend, constructed once at process start
    // and handed to the messaging state explicitly
    let llm_config = LlmConfig::new(config.openai_api_key.clone(), config.llm_model.clone());
    let llm = LlmServiceFactory::create(&config.llm_provider, llm_config)
        .map_err(|e| anyhow::anyhow!("Failed to create LLM service: {}", e))?;

    // Create repositories
    let profile_repos = ProfileRepositories::new(pool.clone());
    let messaging_repos = MessagingRepositories::new(pool.clone());
    let orders_repos = OrdersRepositories::new(pool);

    let profiles_state = ProfilesState {
        repos: profile_repos.clone(),
        auth: auth_config.clone(),
    };

    let messaging_state = MessagingState {
        repos: messaging_repos,
        profiles: profile_repos,
        auth: auth_config.clone(),
        llm: Arc::from(llm),
    };

    let orders_state = OrdersState {
        repos: orders_repos,
        auth: auth_config,
    };

    // Build router: compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Fixline API v0.1.0" }))
        .merge(fixline_profiles::routes().with_state(profiles_state))
        .merge(fixline_messaging::routes().with_state(messaging_state))
        .merge(fixline_orders::routes().with_state(orders_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
