//! Service offering API handlers

use axum::{extract::State, http::StatusCode, Json};
use fixline_auth::AuthActor;
use fixline_common::{Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ProfilesState;
use crate::domain::entities::ServiceOffering;

/// One priced service in a set-services request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ServiceEntryRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub price: Decimal,
}

/// Request replacing the caller's published service catalog
#[derive(Debug, Deserialize, Validate)]
pub struct SetServicesRequest {
    #[validate(nested)]
    #[validate(length(min = 1))]
    pub services: Vec<ServiceEntryRequest>,
}

/// Service offering response DTO
#[derive(Debug, Serialize)]
pub struct ServiceOfferingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub price: Decimal,
}

impl From<ServiceOffering> for ServiceOfferingResponse {
    fn from(s: ServiceOffering) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            name: s.name,
            price: s.price,
        }
    }
}

/// Replace the caller's service offerings
pub async fn set_services(
    AuthActor(actor_id): AuthActor,
    State(state): State<ProfilesState>,
    ValidatedJson(req): ValidatedJson<SetServicesRequest>,
) -> Result<(StatusCode, Json<Vec<ServiceOfferingResponse>>)> {
    // Entity construction enforces the non-negative price invariant before
    // anything is written
    let mut services = Vec::with_capacity(req.services.len());
    for entry in req.services {
        services.push(ServiceOffering::new(actor_id, entry.name, entry.price)?);
    }

    let saved = state
        .repos
        .services
        .replace_for_user(actor_id, &services)
        .await?;

    let responses: Vec<ServiceOfferingResponse> = saved.into_iter().map(Into::into).collect();
    Ok((StatusCode::CREATED, Json(responses)))
}
