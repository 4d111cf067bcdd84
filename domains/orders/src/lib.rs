//! Orders domain: order placement, exclusively owned line items, derived totals

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Order, OrderItem, OrderWithItems};

// Re-export repository types
pub use repository::{OrderRepository, OrdersRepositories};

// Re-export API types
pub use api::routes;
pub use api::OrdersState;
