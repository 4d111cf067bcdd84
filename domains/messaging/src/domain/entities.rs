//! Domain entities for the Messaging domain
//!
//! Messages are append-only: once persisted they are never updated or
//! deleted. A thread is a derived view over the unordered pair of
//! participants, never a stored entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fixline_common::{Error, Result};

/// Directed message between two actors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message. The timestamp is assigned here, immediately
    /// before the insert, so per-call commit order keeps thread timestamps
    /// non-decreasing.
    pub fn new(sender_id: Uuid, receiver_id: Uuid, body: String) -> Result<Self> {
        if body.trim().is_empty() {
            return Err(Error::Validation(
                "Message body cannot be empty or whitespace-only".to_string(),
            ));
        }

        Ok(Message {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            body,
            created_at: Utc::now(),
        })
    }

    /// Whether this message belongs to the thread between `a` and `b`
    /// (participant pair is unordered)
    pub fn in_thread(&self, a: Uuid, b: Uuid) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}
