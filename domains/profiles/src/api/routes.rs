//! Route definitions for the Profiles domain API

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{profiles, services};
use super::middleware::ProfilesState;

/// Create worker profile routes
fn profile_routes() -> Router<ProfilesState> {
    Router::new()
        .route("/v1/workers", get(profiles::list_workers))
        .route("/v1/workers/{id}", get(profiles::get_worker))
        .route("/v1/workers/me/profile", put(profiles::upsert_profile))
}

/// Create service offering routes
fn service_routes() -> Router<ProfilesState> {
    Router::new().route("/v1/workers/me/services", post(services::set_services))
}

/// Create all Profiles domain API routes
pub fn routes() -> Router<ProfilesState> {
    Router::new().merge(profile_routes()).merge(service_routes())
}
