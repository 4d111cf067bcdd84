//! Route definitions for the Messaging domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat, messages};
use super::middleware::MessagingState;

/// Create plain message routes
fn message_routes() -> Router<MessagingState> {
    Router::new().route(
        "/v1/messages",
        get(messages::list_thread).post(messages::send_message),
    )
}

/// Create AI-assisted chat routes
fn chat_routes() -> Router<MessagingState> {
    Router::new().route("/v1/chat/{worker_id}", post(chat::chat_send))
}

/// Create all Messaging domain API routes
pub fn routes() -> Router<MessagingState> {
    Router::new().merge(message_routes()).merge(chat_routes())
}
