pub mod repl;

/// The four top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Search,
    Favorites,
    Detail,
}

/// Hint carried into the Search screen to preselect its filter framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Ingredients,
    Mood,
    Time,
}

impl SearchMode {
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Ingredients => "ingredients",
            SearchMode::Mood => "mood",
            SearchMode::Time => "time",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ingredients" => Some(SearchMode::Ingredients),
            "mood" => Some(SearchMode::Mood),
            "time" => Some(SearchMode::Time),
            _ => None,
        }
    }
}

/// Top-level navigation state. There is no history stack: back from Detail
/// always lands on Search, whichever screen the meal was selected from.
#[derive(Debug)]
pub struct Nav {
    page: Page,
    selected_meal_id: Option<String>,
    search_hint: Option<SearchMode>,
}

impl Nav {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            selected_meal_id: None,
            search_hint: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_meal_id(&self) -> Option<&str> {
        self.selected_meal_id.as_deref()
    }

    pub fn search_hint(&self) -> Option<SearchMode> {
        self.search_hint
    }

    /// Nav bar and shared chrome are suppressed while a recipe is open.
    pub fn chrome_visible(&self) -> bool {
        self.page != Page::Detail
    }

    /// Top-bar or shortcut navigation. Clears the selected meal; the hint
    /// is replaced wholesale, so a plain nav-bar switch drops it.
    pub fn navigate(&mut self, page: Page, hint: Option<SearchMode>) {
        self.page = page;
        self.selected_meal_id = None;
        self.search_hint = hint;
    }

    /// Opening a meal keeps the hint, so backing out of Detail re-renders
    /// Search with the mode that was active.
    pub fn select_meal(&mut self, meal_id: impl Into<String>) {
        self.page = Page::Detail;
        self.selected_meal_id = Some(meal_id.into());
    }

    pub fn back(&mut self) {
        self.page = if self.page == Page::Detail {
            Page::Search
        } else {
            Page::Home
        };
        self.selected_meal_id = None;
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}
