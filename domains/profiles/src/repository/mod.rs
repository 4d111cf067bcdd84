//! Repository implementations for the Profiles domain

pub mod profiles;
pub mod services;

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Persona;
use fixline_common::Result;

pub use profiles::ProfileRepository;
pub use services::ServiceRepository;

/// Combined repository access for the Profiles domain
#[derive(Clone)]
pub struct ProfileRepositories {
    pub profiles: ProfileRepository,
    pub services: ServiceRepository,
}

impl ProfileRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            profiles: ProfileRepository::new(pool.clone()),
            services: ServiceRepository::new(pool),
        }
    }

    /// Resolve a worker's persona: profile fields plus current service
    /// offerings. Fetched fresh on every call; returns `None` when the
    /// worker has no profile.
    pub async fn find_persona(&self, worker_id: Uuid) -> Result<Option<Persona>> {
        let Some(profile) = self.profiles.find(worker_id).await? else {
            return Ok(None);
        };

        let services = self.services.list_by_user(worker_id).await?;
        Ok(Some(Persona::from_profile(&profile, &services)))
    }
}
