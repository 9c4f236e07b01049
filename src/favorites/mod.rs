use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

mod repo;

pub use repo::PgFavorites;

/// One bookmarked meal. Name and thumbnail are denormalized copies taken
/// at favorite-time and never synced with the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct FavoriteRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub meal_id: String,
    pub meal_name: String,
    pub meal_thumb: String,
    pub created_at: OffsetDateTime,
}

/// CRUD over the hosted favorites table. Every operation is scoped to an
/// owner so a second profile never needs a schema change.
///
/// Failures follow the same policy as the catalog: logged, then collapsed
/// into empty/None/false so the screens only ever see safe defaults.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// All records for the owner, newest first.
    async fn list(&self, owner: Uuid) -> Vec<FavoriteRecord>;
    /// Inserts one record. Returns None when the insert did not produce a
    /// row, whether the backend rejected it or suppressed a duplicate.
    async fn add(
        &self,
        owner: Uuid,
        meal_id: &str,
        meal_name: &str,
        meal_thumb: &str,
    ) -> Option<FavoriteRecord>;
    /// Deletes every record matching the meal id. True when the delete ran.
    async fn remove(&self, owner: Uuid, meal_id: &str) -> bool;
    async fn exists(&self, owner: Uuid, meal_id: &str) -> bool;
}
