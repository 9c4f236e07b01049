use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use thiserror::Error;
use tracing::warn;

pub mod model;

pub use model::{IngredientLine, MealDetail, MealSummary, MealsEnvelope, MAX_INGREDIENT_SLOTS};

/// Read-only access to the external recipe catalog.
///
/// Every operation swallows its own failures: transport errors, non-2xx
/// statuses and malformed bodies are logged and collapsed into the same
/// empty/None results as a genuine no-match, so callers cannot tell the
/// difference. Screens are written against that contract.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    async fn search_by_ingredient(&self, ingredient: &str) -> Vec<MealSummary>;
    async fn search_by_name(&self, name: &str) -> Vec<MealSummary>;
    async fn meal_by_id(&self, id: &str) -> Option<MealDetail>;
    async fn random_meals(&self, count: usize) -> Vec<MealSummary>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for a TheMealDB-compatible catalog. One instance is constructed
/// at startup and shared; `reqwest::Client` pools connections internally.
pub struct MealDbCatalog {
    client: Client,
    base_url: String,
}

impl MealDbCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_meals(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<MealSummary>, CatalogError> {
        let envelope: MealsEnvelope = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(CatalogError::Transport)?
            .error_for_status()
            .map_err(CatalogError::Transport)?
            .json()
            .await
            .map_err(CatalogError::Decode)?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeCatalog for MealDbCatalog {
    async fn search_by_ingredient(&self, ingredient: &str) -> Vec<MealSummary> {
        match self.fetch_meals("filter.php", &[("i", ingredient)]).await {
            Ok(meals) => meals,
            Err(e) => {
                warn!(error = %e, ingredient, "ingredient search failed");
                Vec::new()
            }
        }
    }

    async fn search_by_name(&self, name: &str) -> Vec<MealSummary> {
        match self.fetch_meals("search.php", &[("s", name)]).await {
            Ok(meals) => meals,
            Err(e) => {
                warn!(error = %e, name, "name search failed");
                Vec::new()
            }
        }
    }

    async fn meal_by_id(&self, id: &str) -> Option<MealDetail> {
        match self.fetch_meals("lookup.php", &[("i", id)]).await {
            Ok(meals) => meals.into_iter().next().map(MealDetail::from_summary),
            Err(e) => {
                warn!(error = %e, id, "meal lookup failed");
                None
            }
        }
    }

    async fn random_meals(&self, count: usize) -> Vec<MealSummary> {
        // One single-result request per slot, fanned out together. A failed
        // request shrinks the batch instead of failing it.
        let requests = (0..count).map(|_| self.fetch_meals("random.php", &[]));
        let mut meals = Vec::with_capacity(count);
        for result in join_all(requests).await {
            match result {
                Ok(batch) => meals.extend(batch.into_iter().next()),
                Err(e) => warn!(error = %e, "random meal request failed"),
            }
        }
        meals
    }
}
