//! Repository implementations for the Orders domain

pub mod orders;

use sqlx::PgPool;

pub use orders::OrderRepository;

/// Combined repository access for the Orders domain
#[derive(Clone)]
pub struct OrdersRepositories {
    pub orders: OrderRepository,
}

impl OrdersRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }
}
