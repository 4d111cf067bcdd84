//! Shared helpers for Fixline integration tests
//!
//! These tests run against a live Postgres (DATABASE_URL) with the mock
//! generation backend, exercising the composed router end to end.

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use fixline_auth::ActorId;
use fixline_common::Config;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "fixline-integration-test-secret";

/// Test application wrapping the composed router and a database handle
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
}

impl TestApp {
    /// Connect to DATABASE_URL, run migrations, and compose the app with
    /// the mock LLM backend
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_llm_provider("mock").await
    }

    /// Like `new`, but with an explicit generation provider
    /// ("mock-failing" exercises generation-failure handling)
    pub async fn with_llm_provider(llm_provider: &str) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL is required for integration tests"))?;

        let pool = PgPool::connect(&database_url).await?;
        sqlx::migrate!("../../migrations").run(&pool).await?;

        let config = Config {
            database_url,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            llm_provider: llm_provider.to_string(),
            openai_api_key: String::new(),
            llm_model: "mock-model".to_string(),
            log_level: "info".to_string(),
            port: 0,
        };

        let router = fixline_app::create_app(config, pool.clone()).await?;

        Ok(Self { router, pool })
    }

    /// Remove all rows created for the given actors
    pub async fn cleanup(&self, actors: &[ActorId]) -> anyhow::Result<()> {
        for actor in actors {
            sqlx::query("DELETE FROM messages WHERE sender_id = $1 OR receiver_id = $1")
                .bind(actor)
                .execute(&self.pool)
                .await?;
            sqlx::query("DELETE FROM orders WHERE buyer_id = $1 OR seller_id = $1")
                .bind(actor)
                .execute(&self.pool)
                .await?;
            sqlx::query("DELETE FROM worker_profiles WHERE user_id = $1")
                .bind(actor)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }
}

/// Mint a bearer JWT for an actor, matching what the identity provider issues
pub fn create_test_jwt(actor_id: ActorId) -> String {
    let claims = fixline_auth::IdentityClaims {
        sub: actor_id.to_string(),
        iat: chrono::Utc::now().timestamp() as u64,
        exp: (chrono::Utc::now().timestamp() + 3600) as u64,
    };

    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_ref());
    jsonwebtoken::encode(&header, &claims, &key).expect("Failed to encode test JWT")
}

/// Build an authenticated request
pub fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", jwt));

    if let Some(b) = body {
        builder = builder.header("content-type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Parse a response body as JSON
pub async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Publish a worker profile and services through the API
pub async fn seed_plumber(app: &TestApp, worker: ActorId) {
    use tower::ServiceExt;

    let jwt = create_test_jwt(worker);

    let req = authed_request(
        Method::PUT,
        "/v1/workers/me/profile",
        &jwt,
        Some(serde_json::json!({
            "display_name": "Bob",
            "job_title": "Plumber",
            "category": "Home Repair"
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert!(resp.status().is_success(), "profile seed failed");

    let req = authed_request(
        Method::POST,
        "/v1/workers/me/services",
        &jwt,
        Some(serde_json::json!({
            "services": [
                {"name": "Fix Sink", "price": "40"},
                {"name": "Unclog Drain", "price": "25"}
            ]
        })),
    );
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert!(resp.status().is_success(), "services seed failed");
}

/// Fresh random actor id
pub fn actor() -> ActorId {
    Uuid::new_v4()
}
