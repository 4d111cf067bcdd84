//! API layer for the Orders domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::OrdersState;
pub use routes::routes;
