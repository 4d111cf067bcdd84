//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, validate_jwt_token};
use crate::ActorId;

/// Authenticated actor extractor.
///
/// Validates the bearer JWT and yields the actor id from the `sub` claim.
/// The identity provider is external; no user record is loaded here.
#[derive(Debug)]
pub struct AuthActor(pub ActorId);

impl<S> FromRequestParts<S> for AuthActor
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = validate_jwt_token(&token, &config)?;

        let actor_id = claims
            .sub
            .parse::<ActorId>()
            .map_err(|_| AuthError::InvalidActorId)?;

        Ok(AuthActor(actor_id))
    }
}
