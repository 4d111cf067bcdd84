//! Identity-provider boundary for the Fixline API
//!
//! Registration, login, and session issuance live in an external identity
//! provider. This crate only validates the bearer JWTs it mints and yields
//! the stable actor id carried in the token, via axum extractors that work
//! with any state implementing `FromRef<S>` for `AuthConfig`.

mod claims;
mod config;
mod error;
mod extractors;
mod jwt;

pub use claims::IdentityClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AuthActor;

/// Opaque, stable identifier for an authenticated participant (buyer or worker).
pub type ActorId = uuid::Uuid;
