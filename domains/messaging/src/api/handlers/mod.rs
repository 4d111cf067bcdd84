//! HTTP handlers for the Messaging domain

pub mod chat;
pub mod messages;
