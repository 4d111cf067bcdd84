//! Order repository
//!
//! Orders have no update or delete path. Placement writes the order row and
//! every line item inside one transaction: either all rows commit or none do.

use crate::domain::entities::{Order, OrderItem, OrderWithItems};
use fixline_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an order and its line items atomically
    pub async fn create_with_items(
        &self,
        order: &Order,
        items: &[OrderItem],
    ) -> Result<OrderWithItems> {
        let mut tx = self.pool.begin().await?;

        let created_order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (id, buyer_id, seller_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, buyer_id, seller_id, created_at
            "#,
        )
        .bind(order.id)
        .bind(order.buyer_id)
        .bind(order.seller_id)
        .bind(order.created_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut created_items = Vec::with_capacity(items.len());
        for item in items {
            let created = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (id, order_id, description, price)
                VALUES ($1, $2, $3, $4)
                RETURNING id, order_id, description, price
                "#,
            )
            .bind(item.id)
            .bind(item.order_id)
            .bind(&item.description)
            .bind(item.price)
            .fetch_one(&mut *tx)
            .await?;
            created_items.push(created);
        }

        tx.commit().await?;

        Ok(OrderWithItems {
            order: created_order,
            items: created_items,
        })
    }

    /// Find an order with its items by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<OrderWithItems>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, buyer_id, seller_id, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = self.items_for_order(order.id).await?;
        Ok(Some(OrderWithItems { order, items }))
    }

    /// List a buyer's orders, most recent first, each with its items
    pub async fn list_by_buyer(&self, buyer_id: Uuid) -> Result<Vec<OrderWithItems>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, buyer_id, seller_id, created_at
            FROM orders
            WHERE buyer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(buyer_id)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.items_for_order(order.id).await?;
            result.push(OrderWithItems { order, items });
        }

        Ok(result)
    }

    async fn items_for_order(&self, order_id: Uuid) -> Result<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, description, price
            FROM order_items
            WHERE order_id = $1
            ORDER BY description ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
