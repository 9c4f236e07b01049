use futures::future::join_all;
use uuid::Uuid;

use crate::catalog::{MealDetail, RecipeCatalog};
use crate::favorites::{FavoriteRecord, FavoritesStore};

/// The sort selector is rendered but wired to nothing: the list always
/// stays in the store's newest-first order. Kept display-only on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Sort by: Newest",
            SortOrder::Oldest => "Sort by: Oldest",
            SortOrder::NameAsc => "Sort by: Name (A-Z)",
            SortOrder::NameDesc => "Sort by: Name (Z-A)",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            "name-asc" => Some(SortOrder::NameAsc),
            "name-desc" => Some(SortOrder::NameDesc),
            _ => None,
        }
    }
}

/// Saved recipes. Each record is resolved back through the catalog; a
/// favorite whose catalog entry has vanished simply drops out of the view.
#[derive(Debug)]
pub struct FavoritesScreen {
    pub records: Vec<FavoriteRecord>,
    pub meals: Vec<MealDetail>,
    pub loading: bool,
    pub filter: String,
    pub sort_order: SortOrder,
}

impl FavoritesScreen {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            meals: Vec::new(),
            loading: true,
            filter: String::new(),
            sort_order: SortOrder::Newest,
        }
    }

    pub async fn load(
        &mut self,
        catalog: &dyn RecipeCatalog,
        favorites: &dyn FavoritesStore,
        owner: Uuid,
    ) {
        self.loading = true;
        self.records = favorites.list(owner).await;

        let lookups = self.records.iter().map(|r| catalog.meal_by_id(&r.meal_id));
        self.meals = join_all(lookups).await.into_iter().flatten().collect();
        self.loading = false;
    }

    pub fn set_filter(&mut self, term: &str) {
        self.filter = term.trim().to_string();
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Case-insensitive substring filter over the loaded list.
    pub fn filtered(&self) -> Vec<&MealDetail> {
        let needle = self.filter.to_lowercase();
        self.meals
            .iter()
            .filter(|m| m.summary.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for FavoritesScreen {
    fn default() -> Self {
        Self::new()
    }
}
