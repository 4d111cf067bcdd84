//! Domain layer for the Profiles domain

pub mod entities;
