use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use super::{FavoriteRecord, FavoritesStore};

/// Postgres-backed favorites store. Uniqueness of (owner_id, meal_id) is
/// enforced by the table constraint, not by a check before the insert.
#[derive(Clone)]
pub struct PgFavorites {
    db: PgPool,
}

impl PgFavorites {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    async fn try_list(&self, owner: Uuid) -> anyhow::Result<Vec<FavoriteRecord>> {
        let rows = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            SELECT id, owner_id, meal_id, meal_name, meal_thumb, created_at
            FROM favorites
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn try_add(
        &self,
        owner: Uuid,
        meal_id: &str,
        meal_name: &str,
        meal_thumb: &str,
    ) -> anyhow::Result<Option<FavoriteRecord>> {
        let row = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            INSERT INTO favorites (owner_id, meal_id, meal_name, meal_thumb)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (owner_id, meal_id) DO NOTHING
            RETURNING id, owner_id, meal_id, meal_name, meal_thumb, created_at
            "#,
        )
        .bind(owner)
        .bind(meal_id)
        .bind(meal_name)
        .bind(meal_thumb)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn try_remove(&self, owner: Uuid, meal_id: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE owner_id = $1 AND meal_id = $2
            "#,
        )
        .bind(owner)
        .bind(meal_id)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn try_exists(&self, owner: Uuid, meal_id: &str) -> anyhow::Result<bool> {
        let found: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM favorites WHERE owner_id = $1 AND meal_id = $2
            )
            "#,
        )
        .bind(owner)
        .bind(meal_id)
        .fetch_one(&self.db)
        .await?;
        Ok(found)
    }
}

#[async_trait]
impl FavoritesStore for PgFavorites {
    async fn list(&self, owner: Uuid) -> Vec<FavoriteRecord> {
        match self.try_list(owner).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, %owner, "list favorites failed");
                Vec::new()
            }
        }
    }

    async fn add(
        &self,
        owner: Uuid,
        meal_id: &str,
        meal_name: &str,
        meal_thumb: &str,
    ) -> Option<FavoriteRecord> {
        match self.try_add(owner, meal_id, meal_name, meal_thumb).await {
            Ok(row) => row,
            Err(e) => {
                error!(error = %e, %owner, meal_id, "add favorite failed");
                None
            }
        }
    }

    async fn remove(&self, owner: Uuid, meal_id: &str) -> bool {
        match self.try_remove(owner, meal_id).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, %owner, meal_id, "remove favorite failed");
                false
            }
        }
    }

    async fn exists(&self, owner: Uuid, meal_id: &str) -> bool {
        match self.try_exists(owner, meal_id).await {
            Ok(found) => found,
            Err(e) => {
                error!(error = %e, %owner, meal_id, "favorite existence check failed");
                false
            }
        }
    }
}
