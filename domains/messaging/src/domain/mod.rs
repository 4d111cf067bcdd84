//! Domain layer for the Messaging domain

pub mod entities;
pub mod prompt;
