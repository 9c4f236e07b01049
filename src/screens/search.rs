use std::time::Duration;

use crate::app::SearchMode;
use crate::catalog::{MealSummary, RecipeCatalog};

/// Quiet period before an ingredient/term edit re-triggers the query.
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(500);

/// Batch size when no filter is set at all.
pub const RANDOM_BATCH: usize = 12;

/// Suggestion chips under the ingredient input; the first six render.
pub const COMMON_INGREDIENTS: [&str; 15] = [
    "chicken", "beef", "pork", "salmon", "pasta", "rice", "tomato", "onion", "garlic", "potato",
    "carrot", "mushroom", "cheese", "eggs", "bread",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodType {
    Comforting,
    Quick,
    Healthy,
    Adventurous,
}

impl MoodType {
    pub const ALL: [MoodType; 4] = [
        MoodType::Comforting,
        MoodType::Quick,
        MoodType::Healthy,
        MoodType::Adventurous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MoodType::Comforting => "Comforting",
            MoodType::Quick => "Quick & Easy",
            MoodType::Healthy => "Healthy",
            MoodType::Adventurous => "Adventurous",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "comforting" => Some(MoodType::Comforting),
            "quick" => Some(MoodType::Quick),
            "healthy" => Some(MoodType::Healthy),
            "adventurous" => Some(MoodType::Adventurous),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookingTime {
    Under15,
    Under30,
    UnderHour,
    OverHour,
}

impl CookingTime {
    pub const ALL: [CookingTime; 4] = [
        CookingTime::Under15,
        CookingTime::Under30,
        CookingTime::UnderHour,
        CookingTime::OverHour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CookingTime::Under15 => "<15 min",
            CookingTime::Under30 => "<30 min",
            CookingTime::UnderHour => "<1 hour",
            CookingTime::OverHour => "1hr+",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "<15" => Some(CookingTime::Under15),
            "<30" => Some(CookingTime::Under30),
            "<1hr" => Some(CookingTime::UnderHour),
            "1hr+" => Some(CookingTime::OverHour),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryPreference {
    Vegetarian,
    GlutenFree,
    DairyFree,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 3] = [
        DietaryPreference::Vegetarian,
        DietaryPreference::GlutenFree,
        DietaryPreference::DairyFree,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::DairyFree => "Dairy-Free",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "vegetarian" => Some(DietaryPreference::Vegetarian),
            "gluten-free" => Some(DietaryPreference::GlutenFree),
            "dairy-free" => Some(DietaryPreference::DairyFree),
            _ => None,
        }
    }
}

/// Search screen state. All of it is ephemeral: a fresh screen is built on
/// every entry.
///
/// Only the added-ingredient set and the free-text term drive the query.
/// Excluded ingredients, moods, the time bucket and dietary flags are
/// collected and rendered but never factored in; that gap is the shipped
/// behavior and is guarded by tests rather than quietly closed here.
#[derive(Debug)]
pub struct SearchScreen {
    pub term: String,
    pub ingredients: Vec<String>,
    pub excluded: Vec<String>,
    pub moods: Vec<MoodType>,
    pub time_filter: Option<CookingTime>,
    pub dietary: Vec<DietaryPreference>,
    pub results: Vec<MealSummary>,
    pub loading: bool,
    pub active_mode: SearchMode,
    epoch: u64,
}

impl SearchScreen {
    /// The hint preselects the filter framing; without one the screen
    /// defaults to the ingredient-oriented framing.
    pub fn new(hint: Option<SearchMode>) -> Self {
        Self {
            term: String::new(),
            ingredients: Vec::new(),
            excluded: Vec::new(),
            moods: Vec::new(),
            time_filter: None,
            dietary: Vec::new(),
            results: Vec::new(),
            loading: false,
            active_mode: hint.unwrap_or(SearchMode::Ingredients),
            epoch: 0,
        }
    }

    /// First render with nothing set shows a fresh random batch.
    pub async fn ensure_initial(&mut self, catalog: &dyn RecipeCatalog) {
        if self.results.is_empty() && self.ingredients.is_empty() {
            self.run_query(catalog).await;
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True when no later edit has superseded the debounce tick taken at
    /// `epoch`.
    pub fn edit_is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Lowercased, deduplicated. Adding an ingredient consumes the typed
    /// term. Returns false when the token was empty or already present.
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        let token = raw.trim().to_lowercase();
        if token.is_empty() || self.ingredients.contains(&token) {
            return false;
        }
        self.ingredients.push(token);
        self.term.clear();
        self.epoch += 1;
        true
    }

    pub fn remove_ingredient(&mut self, token: &str) -> bool {
        let token = token.to_lowercase();
        let before = self.ingredients.len();
        self.ingredients.retain(|i| i != &token);
        if self.ingredients.len() == before {
            return false;
        }
        self.epoch += 1;
        true
    }

    /// Excluded tokens do not participate in the query and do not trigger
    /// the debounced re-query either.
    pub fn add_excluded(&mut self, raw: &str) -> bool {
        let token = raw.trim().to_lowercase();
        if token.is_empty() || self.excluded.contains(&token) {
            return false;
        }
        self.excluded.push(token);
        true
    }

    pub fn set_term(&mut self, term: &str) {
        self.term = term.trim().to_string();
        self.epoch += 1;
    }

    pub fn toggle_mood(&mut self, mood: MoodType) {
        if let Some(pos) = self.moods.iter().position(|m| *m == mood) {
            self.moods.remove(pos);
        } else {
            self.moods.push(mood);
        }
    }

    pub fn set_time_filter(&mut self, bucket: CookingTime) {
        self.time_filter = Some(bucket);
    }

    pub fn toggle_dietary(&mut self, pref: DietaryPreference) {
        if let Some(pos) = self.dietary.iter().position(|p| *p == pref) {
            self.dietary.remove(pos);
        } else {
            self.dietary.push(pref);
        }
    }

    pub fn reset(&mut self) {
        self.term.clear();
        self.ingredients.clear();
        self.excluded.clear();
        self.moods.clear();
        self.time_filter = None;
        self.dietary.clear();
        self.results.clear();
        self.epoch += 1;
    }

    /// The "Apply Filters" action and the tail of the debounce both land
    /// here. Query policy: first added ingredient wins; otherwise the free
    /// text searches by name; otherwise a fresh random batch.
    pub async fn run_query(&mut self, catalog: &dyn RecipeCatalog) {
        if self.ingredients.is_empty() && self.term.is_empty() {
            self.results = catalog.random_meals(RANDOM_BATCH).await;
            return;
        }

        self.loading = true;
        self.results = if let Some(primary) = self.ingredients.first() {
            catalog.search_by_ingredient(primary).await
        } else {
            catalog.search_by_name(&self.term).await
        };
        self.loading = false;
    }

    /// Re-query after the quiet period, unless a later edit superseded
    /// this tick. Mirrors the apply action otherwise.
    pub async fn debounced_query(&mut self, catalog: &dyn RecipeCatalog) {
        if self.ingredients.is_empty() && self.term.is_empty() {
            return;
        }
        let epoch = self.epoch();
        tokio::time::sleep(DEBOUNCE_QUIET).await;
        if !self.edit_is_current(epoch) {
            return;
        }
        self.run_query(catalog).await;
    }
}
