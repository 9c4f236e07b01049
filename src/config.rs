use serde::Deserialize;
use uuid::Uuid;

/// Public TheMealDB endpoint used when no override is configured.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub catalog: CatalogConfig,
    /// The profile every favorite row is scoped to. A single profile today,
    /// but the column and the parameter exist from day one.
    pub owner_id: Uuid,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let catalog = CatalogConfig {
            base_url: std::env::var("MEALDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.into()),
        };
        let owner_id = match std::env::var("OWNER_ID") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("OWNER_ID is not a valid UUID: {e}"))?,
            Err(_) => Uuid::nil(),
        };
        Ok(Self {
            database_url,
            catalog,
            owner_id,
        })
    }
}
