//! AI-assisted chat handler
//!
//! Turns one inbound human message into a persisted pair
//! `(human message, generated reply)`. The two writes have independent
//! commit points: the human message is durable before the persona lookup or
//! the generation call begin, and is never rolled back when a later step
//! fails. Losing a user's outbound message is worse than occasionally
//! having a message with no auto-reply.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use fixline_auth::AuthActor;
use fixline_common::{Error, Result, ValidatedJson};
use fixline_llm::{CompletionRequest, LlmError, LlmMessage, LlmRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::MessagingState;
use crate::domain::entities::Message;
use crate::domain::prompt::persona_system_prompt;

use super::messages::MessageResponse;

/// Request for sending a chat message to a worker
#[derive(Debug, Deserialize, Validate)]
pub struct ChatSendRequest {
    /// Message body
    #[validate(length(min = 1))]
    pub body: String,
}

/// Response for chat send: the stored human message and the stored
/// generated reply (sender/receiver reversed)
#[derive(Debug, Serialize)]
pub struct ChatSendResponse {
    pub user_message: MessageResponse,
    pub ai_response: MessageResponse,
}

/// Send a message to a worker and generate their persona-grounded reply
pub async fn chat_send(
    AuthActor(sender_id): AuthActor,
    State(state): State<MessagingState>,
    Path(worker_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<ChatSendRequest>,
) -> Result<(StatusCode, Json<ChatSendResponse>)> {
    // Phase 1: persist the human message. Validation happens before any
    // write; a failure here means nothing was saved.
    let human_msg = Message::new(sender_id, worker_id, req.body)?;
    let created_human_msg = state.repos.messages.create(&human_msg).await?;

    // Phase 2: resolve the worker's persona, fetched fresh per request.
    // The human message above stays persisted whatever happens from here.
    let persona = state
        .profiles
        .find_persona(worker_id)
        .await?
        .ok_or_else(|| {
            Error::NotFound(
                "Receiver or profile missing; your message was delivered".to_string(),
            )
        })?;

    let system_prompt = persona_system_prompt(&persona);

    // The generation service is stateless per call: one user turn, no
    // thread history. No database work is in flight while we wait.
    let llm_request = CompletionRequest {
        model: String::new(),
        system_prompt: Some(system_prompt),
        messages: vec![LlmMessage {
            role: LlmRole::User,
            content: created_human_msg.body.clone(),
        }],
        max_tokens: None,
    };

    let llm_response = state.llm.complete(llm_request).await.map_err(|e| {
        tracing::warn!(error = %e, worker_id = %worker_id, "Auto-reply generation failed");
        match e {
            LlmError::Timeout => Error::Generation(
                "Generation timed out; your message was delivered".to_string(),
            ),
            other => Error::Generation(format!(
                "{}; your message was delivered",
                other
            )),
        }
    })?;

    // Phase 3: persist the reply with sender/receiver reversed so it
    // originates from the worker. No automatic retry on failure.
    let reply_msg = Message::new(worker_id, sender_id, llm_response.content)?;
    let created_reply_msg = state.repos.messages.create(&reply_msg).await?;

    tracing::debug!(
        sender = %sender_id,
        worker = %worker_id,
        model = %llm_response.model,
        "Stored chat message pair"
    );

    Ok((
        StatusCode::CREATED,
        Json(ChatSendResponse {
            user_message: created_human_msg.into(),
            ai_response: created_reply_msg.into(),
        }),
    ))
}
