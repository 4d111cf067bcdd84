//! Service offering repository

use crate::domain::entities::ServiceOffering;
use fixline_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a worker's service offerings, sorted by name
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ServiceOffering>> {
        let services = sqlx::query_as::<_, ServiceOffering>(
            r#"
            SELECT id, user_id, name, price
            FROM services
            WHERE user_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    /// Replace a worker's service offerings. Delete plus insert inside one
    /// transaction so readers never observe a half-replaced catalog.
    pub async fn replace_for_user(
        &self,
        user_id: Uuid,
        services: &[ServiceOffering],
    ) -> Result<Vec<ServiceOffering>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM services WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let mut saved = Vec::with_capacity(services.len());
        for service in services {
            let row = sqlx::query_as::<_, ServiceOffering>(
                r#"
                INSERT INTO services (id, user_id, name, price)
                VALUES ($1, $2, $3, $4)
                RETURNING id, user_id, name, price
                "#,
            )
            .bind(service.id)
            .bind(service.user_id)
            .bind(&service.name)
            .bind(service.price)
            .fetch_one(&mut *tx)
            .await?;
            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }
}
