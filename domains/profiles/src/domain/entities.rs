//! Domain entities for the Profiles domain
//!
//! A worker's public profile carries the descriptive fields buyers browse
//! and the fields the auto-reply prompt is grounded on. The `Persona` is a
//! read-only projection of those fields; it has no lifecycle of its own and
//! is fetched fresh on every generation request.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fixline_common::{Error, Result};

/// Maximum display name length (varchar(100))
const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Maximum job title length (varchar(100))
const MAX_JOB_TITLE_LENGTH: usize = 100;

/// Maximum service name length (varchar(200))
const MAX_SERVICE_NAME_LENGTH: usize = 200;

/// Optional descriptive fields on a worker profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub category: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub pay_rate: Option<String>,
    pub location: Option<String>,
    pub response_time: Option<String>,
    pub completion_rate: Option<String>,
    pub rating: Option<String>,
}

/// Worker profile entity (one row per worker actor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkerProfile {
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

impl WorkerProfile {
    /// Create a new worker profile
    pub fn new(
        user_id: Uuid,
        display_name: String,
        job_title: String,
        details: ProfileDetails,
    ) -> Result<Self> {
        if display_name.trim().is_empty() {
            return Err(Error::Validation("Display name is required".to_string()));
        }
        if display_name.len() > MAX_DISPLAY_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Display name must be at most {} characters",
                MAX_DISPLAY_NAME_LENGTH
            )));
        }

        if job_title.trim().is_empty() {
            return Err(Error::Validation("Job title is required".to_string()));
        }
        if job_title.len() > MAX_JOB_TITLE_LENGTH {
            return Err(Error::Validation(format!(
                "Job title must be at most {} characters",
                MAX_JOB_TITLE_LENGTH
            )));
        }

        let now = Utc::now();
        Ok(WorkerProfile {
            user_id,
            display_name,
            job_title,
            category: details.category,
            description: details.description,
            detailed_description: details.detailed_description,
            pay_rate: details.pay_rate,
            location: details.location,
            response_time: details.response_time,
            completion_rate: details.completion_rate,
            rating: details.rating,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Service offering entity (a priced service published by a worker)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub price: Decimal,
}

impl ServiceOffering {
    /// Create a new service offering
    pub fn new(user_id: Uuid, name: String, price: Decimal) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::Validation("Service name is required".to_string()));
        }
        if name.len() > MAX_SERVICE_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Service name must be at most {} characters",
                MAX_SERVICE_NAME_LENGTH
            )));
        }
        if price < Decimal::ZERO {
            return Err(Error::Validation(
                "Service price must not be negative".to_string(),
            ));
        }

        Ok(ServiceOffering {
            id: Uuid::new_v4(),
            user_id,
            name,
            price,
        })
    }
}

/// One priced service as seen through a persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaService {
    pub name: String,
    pub price: Decimal,
}

/// Read-only projection of a worker's public profile used to ground
/// generated replies. Never mutated; rebuilt on every lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub display_name: String,
    pub job_title: String,
    pub services: Vec<PersonaService>,
}

impl Persona {
    /// Project a persona from a profile and its service offerings
    pub fn from_profile(profile: &WorkerProfile, services: &[ServiceOffering]) -> Self {
        Persona {
            display_name: profile.display_name.clone(),
            job_title: profile.job_title.clone(),
            services: services
                .iter()
                .map(|s| PersonaService {
                    name: s.name.clone(),
                    price: s.price,
                })
                .collect(),
        }
    }
}
