//! Plain message API handlers (no auto-reply)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use fixline_auth::AuthActor;
use fixline_common::{Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::MessagingState;
use crate::domain::entities::Message;

/// Request for sending a message
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// Receiving actor
    pub receiver: Uuid,

    /// Message body
    #[validate(length(min = 1))]
    pub body: String,
}

/// Message response DTO. Field names are part of the public API:
/// `{id, sender, receiver, body, timestamp}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender: Uuid,
    pub receiver: Uuid,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            sender: m.sender_id,
            receiver: m.receiver_id,
            body: m.body,
            timestamp: m.created_at,
        }
    }
}

/// Query params for thread retrieval
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// The other participant of the thread
    pub with: Uuid,
}

/// Send a message without triggering an auto-reply
pub async fn send_message(
    AuthActor(sender_id): AuthActor,
    State(state): State<MessagingState>,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let message = Message::new(sender_id, req.receiver, req.body)?;
    let created = state.repos.messages.create(&message).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Retrieve the thread between the caller and another actor, ascending by
/// timestamp. An empty thread is an empty list, not an error.
pub async fn list_thread(
    AuthActor(caller_id): AuthActor,
    State(state): State<MessagingState>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<Vec<MessageResponse>>> {
    let messages = state
        .repos
        .messages
        .thread_between(caller_id, query.with)
        .await?;

    let responses: Vec<MessageResponse> = messages.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}
