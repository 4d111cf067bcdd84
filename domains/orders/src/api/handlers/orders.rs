//! Order API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use fixline_auth::AuthActor;
use fixline_common::{Error, Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::OrdersState;
use crate::domain::entities::{Order, OrderItem, OrderWithItems};

/// One line item in an order placement request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct OrderItemRequest {
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    pub price: Decimal,
}

/// Request for placing an order (buyer is the authenticated caller)
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    /// Selling actor
    pub seller: Uuid,

    #[validate(nested)]
    #[validate(length(min = 1, message = "An order needs at least one line item"))]
    pub items: Vec<OrderItemRequest>,
}

/// Line item response DTO
#[derive(Debug, Serialize)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub description: String,
    pub price: Decimal,
}

/// Order response DTO. Field names are part of the public API:
/// `{id, buyer, seller, items, totalPrice}`.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub buyer: Uuid,
    pub seller: Uuid,
    pub items: Vec<OrderItemResponse>,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<OrderWithItems> for OrderResponse {
    fn from(aggregate: OrderWithItems) -> Self {
        // Total is derived here, on read; it is never stored
        let total_price = aggregate.total_price();
        Self {
            id: aggregate.order.id,
            buyer: aggregate.order.buyer_id,
            seller: aggregate.order.seller_id,
            items: aggregate
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    id: item.id,
                    description: item.description,
                    price: item.price,
                })
                .collect(),
            total_price,
            created_at: aggregate.order.created_at,
        }
    }
}

/// Place an order: one order row plus one row per line item, committed
/// atomically
pub async fn place_order(
    AuthActor(buyer_id): AuthActor,
    State(state): State<OrdersState>,
    ValidatedJson(req): ValidatedJson<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>)> {
    // Entity construction enforces buyer != seller and non-negative prices
    // before any row is written
    let order = Order::new(buyer_id, req.seller)?;

    let mut items = Vec::with_capacity(req.items.len());
    for entry in req.items {
        items.push(OrderItem::new(order.id, entry.description, entry.price)?);
    }

    let created = state.repos.orders.create_with_items(&order, &items).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List the caller's orders as buyer, most recent first
pub async fn list_my_orders(
    AuthActor(buyer_id): AuthActor,
    State(state): State<OrdersState>,
) -> Result<Json<Vec<OrderResponse>>> {
    let orders = state.repos.orders.list_by_buyer(buyer_id).await?;
    let responses: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get a single order; visible only to its buyer or seller
pub async fn get_order(
    AuthActor(caller_id): AuthActor,
    State(state): State<OrdersState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>> {
    let aggregate = state
        .repos
        .orders
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Order not found".to_string()))?;

    if aggregate.order.buyer_id != caller_id && aggregate.order.seller_id != caller_id {
        return Err(Error::NotFound("Order not found".to_string()));
    }

    Ok(Json(aggregate.into()))
}
