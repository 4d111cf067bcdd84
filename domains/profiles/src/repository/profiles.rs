//! Worker profile repository

use crate::domain::entities::WorkerProfile;
use fixline_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a worker profile by actor ID
    pub async fn find(&self, user_id: Uuid) -> Result<Option<WorkerProfile>> {
        let profile = sqlx::query_as::<_, WorkerProfile>(
            r#"
            SELECT user_id, display_name, job_title, category, description,
                   detailed_description, pay_rate, location, response_time,
                   completion_rate, rating, created_at, updated_at
            FROM worker_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// List published worker profiles (service-provider listing), newest
    /// first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<WorkerProfile>> {
        let profiles = sqlx::query_as::<_, WorkerProfile>(
            r#"
            SELECT user_id, display_name, job_title, category, description,
                   detailed_description, pay_rate, location, response_time,
                   completion_rate, rating, created_at, updated_at
            FROM worker_profiles
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    /// Insert or update a worker profile (one row per worker)
    pub async fn upsert(&self, profile: &WorkerProfile) -> Result<WorkerProfile> {
        let saved = sqlx::query_as::<_, WorkerProfile>(
            r#"
            INSERT INTO worker_profiles (
                user_id, display_name, job_title, category, description,
                detailed_description, pay_rate, location, response_time,
                completion_rate, rating, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                job_title = EXCLUDED.job_title,
                category = EXCLUDED.category,
                description = EXCLUDED.description,
                detailed_description = EXCLUDED.detailed_description,
                pay_rate = EXCLUDED.pay_rate,
                location = EXCLUDED.location,
                response_time = EXCLUDED.response_time,
                completion_rate = EXCLUDED.completion_rate,
                rating = EXCLUDED.rating,
                updated_at = EXCLUDED.updated_at
            RETURNING user_id, display_name, job_title, category, description,
                      detailed_description, pay_rate, location, response_time,
                      completion_rate, rating, created_at, updated_at
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.display_name)
        .bind(&profile.job_title)
        .bind(&profile.category)
        .bind(&profile.description)
        .bind(&profile.detailed_description)
        .bind(&profile.pay_rate)
        .bind(&profile.location)
        .bind(&profile.response_time)
        .bind(&profile.completion_rate)
        .bind(&profile.rating)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
