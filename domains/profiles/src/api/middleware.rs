//! Profiles domain state and auth integration

use crate::ProfileRepositories;
use axum::extract::FromRef;
use fixline_auth::AuthConfig;

/// Application state for the Profiles domain
#[derive(Clone)]
pub struct ProfilesState {
    pub repos: ProfileRepositories,
    pub auth: AuthConfig,
}

impl FromRef<ProfilesState> for AuthConfig {
    fn from_ref(state: &ProfilesState) -> Self {
        state.auth.clone()
    }
}
