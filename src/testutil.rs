//! Stub adapters and fixture builders shared across the unit tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::{MealDetail, MealSummary, RecipeCatalog};
use crate::favorites::{FavoriteRecord, FavoritesStore};

pub fn meal(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: format!("https://example.test/{id}.jpg"),
        category: None,
        area: None,
        instructions: None,
        tags: None,
        youtube: None,
        extra: BTreeMap::new(),
    }
}

pub fn detail_with_slots(id: &str, name: &str, ingredients: &[&str]) -> MealDetail {
    let mut summary = meal(id, name);
    for (i, ingredient) in ingredients.iter().enumerate() {
        summary.extra.insert(
            format!("strIngredient{}", i + 1),
            Some((*ingredient).to_string()),
        );
    }
    MealDetail::from_summary(summary)
}

pub fn detail_with_instructions(id: &str, name: &str, instructions: &str) -> MealDetail {
    let mut summary = meal(id, name);
    summary.instructions = Some(instructions.to_string());
    MealDetail::from_summary(summary)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    Ingredient(String),
    Name(String),
    Lookup(String),
    Random(usize),
}

/// Canned catalog that records every call it serves.
#[derive(Default)]
pub struct StubCatalog {
    by_ingredient: Vec<MealSummary>,
    by_name: Vec<MealSummary>,
    details: HashMap<String, MealDetail>,
    randoms: Vec<MealSummary>,
    calls: Mutex<Vec<CatalogCall>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_by_ingredient(mut self, meals: Vec<MealSummary>) -> Self {
        self.by_ingredient = meals;
        self
    }

    pub fn with_by_name(mut self, meals: Vec<MealSummary>) -> Self {
        self.by_name = meals;
        self
    }

    pub fn with_detail(mut self, detail: MealDetail) -> Self {
        self.details.insert(detail.summary.id.clone(), detail);
        self
    }

    pub fn with_randoms(mut self, meals: Vec<MealSummary>) -> Self {
        self.randoms = meals;
        self
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn random_counts(&self) -> Vec<usize> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                CatalogCall::Random(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: CatalogCall) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl RecipeCatalog for StubCatalog {
    async fn search_by_ingredient(&self, ingredient: &str) -> Vec<MealSummary> {
        self.record(CatalogCall::Ingredient(ingredient.to_string()));
        self.by_ingredient.clone()
    }

    async fn search_by_name(&self, name: &str) -> Vec<MealSummary> {
        self.record(CatalogCall::Name(name.to_string()));
        self.by_name.clone()
    }

    async fn meal_by_id(&self, id: &str) -> Option<MealDetail> {
        self.record(CatalogCall::Lookup(id.to_string()));
        self.details.get(id).cloned()
    }

    async fn random_meals(&self, count: usize) -> Vec<MealSummary> {
        self.record(CatalogCall::Random(count));
        self.randoms.iter().cloned().cycle().take(count).collect()
    }
}

/// In-memory favorites store with the same observable behavior as the
/// Postgres one: newest-first listing, duplicate inserts suppressed,
/// owner scoping on every operation.
#[derive(Default)]
pub struct MemoryFavorites {
    rows: Mutex<Vec<FavoriteRecord>>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, owner: Uuid, meal_id: &str, meal_name: &str) {
        self.add(
            owner,
            meal_id,
            meal_name,
            &format!("https://example.test/{meal_id}.jpg"),
        )
        .await;
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavorites {
    async fn list(&self, owner: Uuid) -> Vec<FavoriteRecord> {
        let rows = self.rows.lock().expect("rows lock");
        rows.iter()
            .rev()
            .filter(|r| r.owner_id == owner)
            .cloned()
            .collect()
    }

    async fn add(
        &self,
        owner: Uuid,
        meal_id: &str,
        meal_name: &str,
        meal_thumb: &str,
    ) -> Option<FavoriteRecord> {
        let mut rows = self.rows.lock().expect("rows lock");
        if rows
            .iter()
            .any(|r| r.owner_id == owner && r.meal_id == meal_id)
        {
            return None;
        }
        let record = FavoriteRecord {
            id: Uuid::new_v4(),
            owner_id: owner,
            meal_id: meal_id.to_string(),
            meal_name: meal_name.to_string(),
            meal_thumb: meal_thumb.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        rows.push(record.clone());
        Some(record)
    }

    async fn remove(&self, owner: Uuid, meal_id: &str) -> bool {
        let mut rows = self.rows.lock().expect("rows lock");
        rows.retain(|r| !(r.owner_id == owner && r.meal_id == meal_id));
        true
    }

    async fn exists(&self, owner: Uuid, meal_id: &str) -> bool {
        let rows = self.rows.lock().expect("rows lock");
        rows.iter()
            .any(|r| r.owner_id == owner && r.meal_id == meal_id)
    }
}
