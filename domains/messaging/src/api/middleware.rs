//! Messaging domain state and auth integration

use crate::MessagingRepositories;
use axum::extract::FromRef;
use fixline_auth::AuthConfig;
use fixline_llm::LlmService;
use fixline_profiles::ProfileRepositories;
use std::sync::Arc;

/// Application state for the Messaging domain
#[derive(Clone)]
pub struct MessagingState {
    pub repos: MessagingRepositories,
    /// Read-only persona lookups against the profile catalog
    pub profiles: ProfileRepositories,
    pub auth: AuthConfig,
    pub llm: Arc<dyn LlmService>,
}

impl FromRef<MessagingState> for AuthConfig {
    fn from_ref(state: &MessagingState) -> Self {
        state.auth.clone()
    }
}
