use crate::app::SearchMode;
use crate::catalog::{MealSummary, RecipeCatalog};

/// Tonight's Suggestions batch size.
pub const SUGGESTION_COUNT: usize = 4;

/// The three shortcut tiles, each navigating to Search with a mode hint.
pub const SHORTCUTS: [(SearchMode, &str, &str); 3] = [
    (
        SearchMode::Ingredients,
        "What's in My Kitchen?",
        "Find recipes with ingredients you have",
    ),
    (
        SearchMode::Mood,
        "Cook by Mood",
        "Let your feelings guide your meal",
    ),
    (
        SearchMode::Time,
        "Time-Based Cooking",
        "Quick meals or slow-cooked delights",
    ),
];

/// Landing screen: a random sample of suggestions with a manual refresh.
/// The search box here is only a navigation trigger, not a working input.
#[derive(Debug)]
pub struct HomeScreen {
    pub suggestions: Vec<MealSummary>,
    pub loading: bool,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            loading: true,
        }
    }

    /// Also the refresh action: a fresh random sample every time.
    pub async fn load(&mut self, catalog: &dyn RecipeCatalog) {
        self.loading = true;
        self.suggestions = catalog.random_meals(SUGGESTION_COUNT).await;
        self.loading = false;
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
