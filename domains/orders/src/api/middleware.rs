//! Orders domain state and auth integration

use crate::OrdersRepositories;
use axum::extract::FromRef;
use fixline_auth::AuthConfig;

/// Application state for the Orders domain
#[derive(Clone)]
pub struct OrdersState {
    pub repos: OrdersRepositories,
    pub auth: AuthConfig,
}

impl FromRef<OrdersState> for AuthConfig {
    fn from_ref(state: &OrdersState) -> Self {
        state.auth.clone()
    }
}
