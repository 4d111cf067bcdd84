//! Domain entities for the Orders domain
//!
//! An order exclusively owns its line items: created together, deleted
//! together, never reassigned. The total price is always derived from the
//! current items and never stored, so it cannot drift from the line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fixline_common::{Error, Result};

/// Maximum line item description length (varchar(500))
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub seller_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order
    pub fn new(buyer_id: Uuid, seller_id: Uuid) -> Result<Self> {
        if buyer_id == seller_id {
            return Err(Error::Validation(
                "Buyer and seller must be different actors".to_string(),
            ));
        }

        Ok(Order {
            id: Uuid::new_v4(),
            buyer_id,
            seller_id,
            created_at: Utc::now(),
        })
    }
}

/// Order line item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub description: String,
    pub price: Decimal,
}

impl OrderItem {
    /// Create a new line item linked to its owning order
    pub fn new(order_id: Uuid, description: String, price: Decimal) -> Result<Self> {
        if description.trim().is_empty() {
            return Err(Error::Validation(
                "Line item description is required".to_string(),
            ));
        }
        if description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(Error::Validation(format!(
                "Line item description must be at most {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }
        if price < Decimal::ZERO {
            return Err(Error::Validation(
                "Line item price must not be negative".to_string(),
            ));
        }

        Ok(OrderItem {
            id: Uuid::new_v4(),
            order_id,
            description,
            price,
        })
    }
}

/// An order together with its owned line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

impl OrderWithItems {
    /// Total price, recomputed from the current items on every call.
    /// Zero items means a zero total, not an error.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }
}
