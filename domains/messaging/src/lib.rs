//! Messaging domain: buyer-worker threads, AI-assisted auto-reply orchestration

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Message;
pub use domain::prompt::persona_system_prompt;

// Re-export repository types
pub use repository::{MessageRepository, MessagingRepositories};

// Re-export API types
pub use api::routes;
pub use api::MessagingState;
