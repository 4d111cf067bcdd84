//! Message repository
//!
//! The messages table is append-only; there is no update or delete path.

use crate::domain::entities::Message;
use fixline_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a message (durable write, no notification side effects)
    pub async fn create(&self, msg: &Message) -> Result<Message> {
        let created = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, sender_id, receiver_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, sender_id, receiver_id, body, created_at
            "#,
        )
        .bind(msg.id)
        .bind(msg.sender_id)
        .bind(msg.receiver_id)
        .bind(&msg.body)
        .bind(msg.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// All messages between the unordered pair `{a, b}`, ascending by
    /// creation time (id as a deterministic tie-break). Empty result is not
    /// an error.
    pub async fn thread_between(&self, a: Uuid, b: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, sender_id, receiver_id, body, created_at
            FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(a)
        .bind(b)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
