//! Route definitions for the Orders domain API

use axum::{routing::get, Router};

use super::handlers::orders;
use super::middleware::OrdersState;

/// Create all Orders domain API routes
pub fn routes() -> Router<OrdersState> {
    Router::new()
        .route(
            "/v1/orders",
            get(orders::list_my_orders).post(orders::place_order),
        )
        .route("/v1/orders/{id}", get(orders::get_order))
}
