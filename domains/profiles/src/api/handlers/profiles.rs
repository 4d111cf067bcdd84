//! Worker profile API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use fixline_auth::AuthActor;
use fixline_common::{Error, Pagination, Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ProfilesState;
use crate::domain::entities::{ProfileDetails, WorkerProfile};

/// Request for creating/updating the caller's worker profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,

    #[validate(length(min = 1, max = 100))]
    pub job_title: String,

    pub category: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub pay_rate: Option<String>,
    pub location: Option<String>,
    pub response_time: Option<String>,
    pub completion_rate: Option<String>,
    pub rating: Option<String>,
}

/// Worker profile response DTO
#[derive(Debug, Serialize)]
pub struct WorkerProfileResponse {
    pub user_id: Uuid,
    pub display_name: String,
    pub job_title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub pay_rate: Option<String>,
    pub location: Option<String>,
    pub response_time: Option<String>,
    pub completion_rate: Option<String>,
    pub rating: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WorkerProfile> for WorkerProfileResponse {
    fn from(p: WorkerProfile) -> Self {
        Self {
            user_id: p.user_id,
            display_name: p.display_name,
            job_title: p.job_title,
            category: p.category,
            description: p.description,
            detailed_description: p.detailed_description,
            pay_rate: p.pay_rate,
            location: p.location,
            response_time: p.response_time,
            completion_rate: p.completion_rate,
            rating: p.rating,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// One service offering in a worker detail response
#[derive(Debug, Serialize)]
pub struct ServiceEntryResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
}

/// Worker detail response: profile plus published services
#[derive(Debug, Serialize)]
pub struct WorkerDetailResponse {
    #[serde(flatten)]
    pub profile: WorkerProfileResponse,
    pub services: Vec<ServiceEntryResponse>,
}

/// Create or update the caller's worker profile
pub async fn upsert_profile(
    AuthActor(actor_id): AuthActor,
    State(state): State<ProfilesState>,
    ValidatedJson(req): ValidatedJson<UpsertProfileRequest>,
) -> Result<(StatusCode, Json<WorkerProfileResponse>)> {
    let profile = WorkerProfile::new(
        actor_id,
        req.display_name,
        req.job_title,
        ProfileDetails {
            category: req.category,
            description: req.description,
            detailed_description: req.detailed_description,
            pay_rate: req.pay_rate,
            location: req.location,
            response_time: req.response_time,
            completion_rate: req.completion_rate,
            rating: req.rating,
        },
    )?;

    let saved = state.repos.profiles.upsert(&profile).await?;
    Ok((StatusCode::OK, Json(saved.into())))
}

/// List workers with published profiles
pub async fn list_workers(
    State(state): State<ProfilesState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<WorkerProfileResponse>>> {
    let profiles = state
        .repos
        .profiles
        .list(pagination.offset(), pagination.limit())
        .await?;
    let responses: Vec<WorkerProfileResponse> = profiles.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get one worker's profile and service offerings
pub async fn get_worker(
    State(state): State<ProfilesState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkerDetailResponse>> {
    let profile = state
        .repos
        .profiles
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Worker profile not found".to_string()))?;

    let services = state.repos.services.list_by_user(id).await?;

    Ok(Json(WorkerDetailResponse {
        profile: profile.into(),
        services: services
            .into_iter()
            .map(|s| ServiceEntryResponse {
                id: s.id,
                name: s.name,
                price: s.price,
            })
            .collect(),
    }))
}
