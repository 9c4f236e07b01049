use std::collections::BTreeSet;

use uuid::Uuid;

use crate::catalog::{MealDetail, RecipeCatalog};
use crate::favorites::FavoritesStore;

/// Static header figures. Prep time and servings are fixed display values;
/// only the cook time is derived.
pub const PREP_TIME_MINUTES: usize = 15;
pub const SERVINGS: usize = 4;
pub const DIFFICULTY: &str = "Easy";

/// Placeholder per-serving figures for the nutrition tab. Display-only:
/// nothing computes these from the recipe.
pub const NUTRITION_FACTS: [(&str, &str); 4] = [
    ("Calories", "450"),
    ("Protein", "25g"),
    ("Carbs", "35g"),
    ("Fat", "18g"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Ingredients,
    Instructions,
    Nutrition,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [
        DetailTab::Ingredients,
        DetailTab::Instructions,
        DetailTab::Nutrition,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Ingredients => "Ingredients",
            DetailTab::Instructions => "Instructions",
            DetailTab::Nutrition => "Nutrition",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ingredients" => Some(DetailTab::Ingredients),
            "instructions" => Some(DetailTab::Instructions),
            "nutrition" => Some(DetailTab::Nutrition),
            _ => None,
        }
    }
}

/// One open recipe. The checked set is keyed by ingredient list index and
/// lives only as long as this screen, so it starts empty for every meal.
#[derive(Debug)]
pub struct DetailScreen {
    pub meal_id: String,
    pub meal: Option<MealDetail>,
    pub loading: bool,
    pub favorite: bool,
    pub active_tab: DetailTab,
    pub checked: BTreeSet<usize>,
}

impl DetailScreen {
    pub fn new(meal_id: impl Into<String>) -> Self {
        Self {
            meal_id: meal_id.into(),
            meal: None,
            loading: true,
            favorite: false,
            active_tab: DetailTab::Ingredients,
            checked: BTreeSet::new(),
        }
    }

    /// Loads the full record and the favorite flag together.
    pub async fn load(
        &mut self,
        catalog: &dyn RecipeCatalog,
        favorites: &dyn FavoritesStore,
        owner: Uuid,
    ) {
        self.loading = true;
        let (meal, favorite) = tokio::join!(
            catalog.meal_by_id(&self.meal_id),
            favorites.exists(owner, &self.meal_id)
        );
        self.meal = meal;
        self.favorite = favorite;
        self.checked.clear();
        self.loading = false;
    }

    pub fn set_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    /// Check off / restore one ingredient line. Out-of-range indices are
    /// ignored. Returns the new checked state.
    pub fn toggle_ingredient(&mut self, index: usize) -> bool {
        let len = self.meal.as_ref().map_or(0, |m| m.ingredients.len());
        if index >= len {
            return false;
        }
        if self.checked.remove(&index) {
            false
        } else {
            self.checked.insert(index);
            true
        }
    }

    /// Raw instructions split into trimmed, non-empty, numbered steps.
    pub fn instructions(&self) -> Vec<String> {
        self.meal
            .as_ref()
            .and_then(|m| m.summary.instructions.as_deref())
            .map(|text| {
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Deterministic "Cook Time" figure: 15 minutes plus 2 per ingredient.
    /// Not to be confused with the per-card estimate, which is random.
    pub fn cook_time_minutes(&self) -> Option<usize> {
        self.meal
            .as_ref()
            .map(|m| PREP_TIME_MINUTES + m.ingredients.len() * 2)
    }

    /// The save button. Flips the store first, then the local flag.
    pub async fn toggle_favorite(&mut self, favorites: &dyn FavoritesStore, owner: Uuid) {
        let Some(meal) = &self.meal else {
            return;
        };
        if self.favorite {
            favorites.remove(owner, &self.meal_id).await;
            self.favorite = false;
        } else {
            favorites
                .add(
                    owner,
                    &meal.summary.id,
                    &meal.summary.name,
                    &meal.summary.thumbnail,
                )
                .await;
            self.favorite = true;
        }
    }
}
