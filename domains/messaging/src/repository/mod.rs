//! Repository implementations for the Messaging domain

pub mod messages;

use sqlx::PgPool;

pub use messages::MessageRepository;

/// Combined repository access for the Messaging domain
#[derive(Clone)]
pub struct MessagingRepositories {
    pub messages: MessageRepository,
}

impl MessagingRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            messages: MessageRepository::new(pool),
        }
    }
}
