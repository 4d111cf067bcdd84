//! HTTP handlers for the Profiles domain

pub mod profiles;
pub mod services;
