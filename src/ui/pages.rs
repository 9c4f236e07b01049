use std::fmt::Write as _;

use crate::app::SearchMode;
use crate::screens::detail::{DetailTab, DIFFICULTY, NUTRITION_FACTS, PREP_TIME_MINUTES, SERVINGS};
use crate::screens::favorites::SortOrder;
use crate::screens::home::SHORTCUTS;
use crate::screens::search::{CookingTime, DietaryPreference, MoodType, COMMON_INGREDIENTS};
use crate::screens::{DetailScreen, FavoritesScreen, HomeScreen, SearchScreen};
use crate::ui::card::render_card_grid;
use crate::ui::layout::render_empty;

pub fn render_home(screen: &HomeScreen, flags: &[bool]) -> String {
    let mut out = String::new();
    writeln!(out, "\nWhat are we cooking today, Taylor?").ok();
    writeln!(out, "Let's find the perfect recipe for you\n").ok();
    writeln!(
        out,
        "  Search for recipes, ingredients...        (type: search)"
    )
    .ok();
    writeln!(out).ok();
    for (mode, title, subtitle) in SHORTCUTS {
        writeln!(out, "  ({}) {title}", mode.label()).ok();
        writeln!(out, "        {subtitle}").ok();
    }
    writeln!(out, "\nTonight's Suggestions                  (refresh)").ok();
    if screen.loading {
        writeln!(out, "  Loading…").ok();
    } else {
        let meals: Vec<_> = screen.suggestions.iter().collect();
        writeln!(out, "{}", render_card_grid(&meals, flags)).ok();
    }
    writeln!(out, "\n  My Favorites").ok();
    writeln!(out, "  Save recipes you love and access them anytime").ok();
    writeln!(out, "  View My Favorites                    (favorites)").ok();
    out
}

fn search_framing(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Ingredients => "Start with what's in your kitchen.",
        SearchMode::Mood => "Let your mood pick tonight's dinner.",
        SearchMode::Time => "How much time have you got?",
    }
}

pub fn render_search(screen: &SearchScreen, flags: &[bool]) -> String {
    let mut out = String::new();
    writeln!(out, "\nWhat should I cook today?").ok();
    writeln!(
        out,
        "Find the perfect recipe based on what you have, how you feel, and how much time you've got."
    )
    .ok();
    writeln!(out, "{}\n", search_framing(screen.active_mode)).ok();

    writeln!(out, "Refine Your Search                       (reset)").ok();
    write!(out, "  Try:").ok();
    for ing in COMMON_INGREDIENTS.iter().take(6) {
        write!(out, " +{ing}").ok();
    }
    writeln!(out).ok();
    if !screen.ingredients.is_empty() {
        writeln!(out, "  Ingredients You Have: {}", screen.ingredients.join(", ")).ok();
    }
    if !screen.excluded.is_empty() {
        writeln!(out, "  Excluding: {}", screen.excluded.join(", ")).ok();
    }
    if !screen.term.is_empty() {
        writeln!(out, "  Search term: {}", screen.term).ok();
    }

    write!(out, "  Mood:").ok();
    for mood in MoodType::ALL {
        let mark = if screen.moods.contains(&mood) { "x" } else { " " };
        write!(out, " [{mark}] {}", mood.label()).ok();
    }
    writeln!(out).ok();

    write!(out, "  Cooking Time:").ok();
    for bucket in CookingTime::ALL {
        let mark = if screen.time_filter == Some(bucket) { "*" } else { " " };
        write!(out, " ({mark}) {}", bucket.label()).ok();
    }
    writeln!(out).ok();

    write!(out, "  Dietary Preferences:").ok();
    for pref in DietaryPreference::ALL {
        let mark = if screen.dietary.contains(&pref) { "x" } else { " " };
        write!(out, " [{mark}] {}", pref.label()).ok();
    }
    writeln!(out).ok();

    writeln!(out, "  Apply Filters                          (apply)\n").ok();

    if screen.loading {
        writeln!(out, "  Loading…").ok();
    } else if screen.results.is_empty() {
        out.push_str(&render_empty(
            "No recipes found",
            "Try adjusting your filters or search terms",
        ));
    } else {
        let meals: Vec<_> = screen.results.iter().collect();
        writeln!(out, "{}", render_card_grid(&meals, flags)).ok();
    }
    out
}

pub fn render_detail(screen: &DetailScreen) -> String {
    let mut out = String::new();
    writeln!(out, "\n< Back to recipes                        (back)\n").ok();

    if screen.loading {
        writeln!(out, "  Loading recipe...").ok();
        return out;
    }
    let Some(meal) = &screen.meal else {
        out.push_str(&render_empty("Recipe not found", "Go back (back)"));
        return out;
    };

    writeln!(out, "{}", meal.summary.name).ok();
    writeln!(
        out,
        "A delicious {} recipe from {} cuisine. Perfect for any occasion, this dish combines wonderful flavors and textures.",
        meal.summary
            .category
            .as_deref()
            .unwrap_or_default()
            .to_lowercase(),
        meal.summary.area.as_deref().unwrap_or_default()
    )
    .ok();

    let mut chips: Vec<&str> = Vec::new();
    chips.extend(meal.summary.category.as_deref());
    chips.extend(meal.summary.area.as_deref());
    chips.extend(meal.summary.tag_chips());
    if !chips.is_empty() {
        writeln!(out, "  [{}]", chips.join("] [")).ok();
    }

    let cook_time = screen.cook_time_minutes().unwrap_or(PREP_TIME_MINUTES);
    writeln!(
        out,
        "\n  Prep Time: {PREP_TIME_MINUTES} mins | Cook Time: {cook_time} mins | Servings: {SERVINGS} People | Difficulty: {DIFFICULTY}"
    )
    .ok();
    writeln!(
        out,
        "  {}                      (fav)",
        if screen.favorite {
            "Saved"
        } else {
            "Save to Favorites"
        }
    )
    .ok();

    let tab_bar: Vec<String> = DetailTab::ALL
        .iter()
        .map(|t| {
            if *t == screen.active_tab {
                format!("[{}]", t.label())
            } else {
                format!(" {} ", t.label())
            }
        })
        .collect();
    writeln!(out, "\n{}", tab_bar.join(" ")).ok();

    match screen.active_tab {
        DetailTab::Ingredients => {
            writeln!(out, "Ingredients & Instructions").ok();
            for (i, line) in meal.ingredients.iter().enumerate() {
                let mark = if screen.checked.contains(&i) { "x" } else { " " };
                writeln!(
                    out,
                    "  {:>2}. [{mark}] {} {}",
                    i + 1,
                    line.measure,
                    line.ingredient
                )
                .ok();
            }
        }
        DetailTab::Instructions => {
            writeln!(out, "Step-by-Step Instructions").ok();
            for (i, step) in screen.instructions().iter().enumerate() {
                writeln!(out, "  {:>2}. {step}", i + 1).ok();
            }
            if let Some(url) = meal.summary.youtube.as_deref() {
                writeln!(out, "\n  Video Tutorial: Watch on YouTube at {url}").ok();
            }
        }
        DetailTab::Nutrition => {
            writeln!(out, "Nutritional Information").ok();
            writeln!(out, "Estimated values per serving").ok();
            for (label, value) in NUTRITION_FACTS {
                writeln!(out, "  {label}: {value}").ok();
            }
            writeln!(
                out,
                "  * Nutritional values are estimates and may vary based on specific ingredients used."
            )
            .ok();
        }
    }
    out
}

pub fn render_favorites(screen: &FavoritesScreen, flags: &[bool]) -> String {
    let mut out = String::new();
    writeln!(out, "\nMy Favorite Recipes").ok();
    writeln!(out, "Your saved recipes, all in one place\n").ok();

    if screen.loading {
        writeln!(out, "  Loading…").ok();
        return out;
    }
    if !screen.records.is_empty() {
        writeln!(out, "  Search my favorites: {}      (filter <text>)", screen.filter).ok();
    }

    let filtered = screen.filtered();
    if !filtered.is_empty() {
        let noun = if filtered.len() == 1 { "recipe" } else { "recipes" };
        let options: Vec<String> = SortOrder::ALL
            .iter()
            .map(|o| {
                if *o == screen.sort_order {
                    format!("[{}]", o.label())
                } else {
                    o.label().to_string()
                }
            })
            .collect();
        writeln!(out, "  {} {noun}    {}", filtered.len(), options.join(" | ")).ok();
        let meals: Vec<_> = filtered.iter().map(|m| &m.summary).collect();
        writeln!(out, "{}", render_card_grid(&meals, flags)).ok();
    } else if screen.records.is_empty() {
        out.push_str(&render_empty(
            "No favorites yet",
            "Start exploring recipes and save your favorites by clicking the heart icon",
        ));
    } else {
        out.push_str(&render_empty(
            "No recipes found",
            "Try adjusting your search term",
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::{DetailScreen, FavoritesScreen, HomeScreen, SearchScreen};
    use crate::testutil::{detail_with_slots, meal};

    #[test]
    fn home_renders_shortcuts_and_suggestions() {
        let mut screen = HomeScreen::new();
        screen.loading = false;
        screen.suggestions = vec![meal("1", "Poutine")];
        let page = render_home(&screen, &[false]);
        assert!(page.contains("What's in My Kitchen?"));
        assert!(page.contains("Cook by Mood"));
        assert!(page.contains("Time-Based Cooking"));
        assert!(page.contains("Tonight's Suggestions"));
        assert!(page.contains("Poutine"));
    }

    #[test]
    fn search_first_render_reflects_the_mode_hint() {
        let hinted = SearchScreen::new(Some(SearchMode::Mood));
        assert!(render_search(&hinted, &[]).contains("Let your mood pick tonight's dinner."));

        let unhinted = SearchScreen::new(None);
        assert!(render_search(&unhinted, &[]).contains("Start with what's in your kitchen."));
    }

    #[test]
    fn search_empty_results_show_the_empty_panel() {
        let mut screen = SearchScreen::new(None);
        screen.loading = false;
        let page = render_search(&screen, &[]);
        assert!(page.contains("No recipes found"));
        assert!(page.contains("Try adjusting your filters or search terms"));
    }

    #[test]
    fn detail_renders_stats_tabs_and_checklist() {
        let mut screen = DetailScreen::new("1");
        screen.loading = false;
        screen.meal = Some(detail_with_slots("1", "Chicken Handi", &["chicken", "ghee"]));
        screen.toggle_ingredient(0);
        let page = render_detail(&screen);
        assert!(page.contains("Chicken Handi"));
        assert!(page.contains("Cook Time: 19 mins"));
        assert!(page.contains("[Ingredients]"));
        assert!(page.contains("[x] "));
        assert!(page.contains("Save to Favorites"));
    }

    #[test]
    fn detail_nutrition_tab_is_static_content() {
        let mut screen = DetailScreen::new("1");
        screen.loading = false;
        screen.meal = Some(detail_with_slots("1", "Chicken Handi", &["chicken"]));
        screen.set_tab(DetailTab::Nutrition);
        let page = render_detail(&screen);
        assert!(page.contains("Calories: 450"));
        assert!(page.contains("Protein: 25g"));
        assert!(page.contains("estimates and may vary"));
    }

    #[test]
    fn detail_missing_meal_renders_not_found() {
        let mut screen = DetailScreen::new("404");
        screen.loading = false;
        let page = render_detail(&screen);
        assert!(page.contains("Recipe not found"));
    }

    #[test]
    fn favorites_empty_state_differs_from_filter_miss() {
        let mut screen = FavoritesScreen::new();
        screen.loading = false;
        assert!(render_favorites(&screen, &[]).contains("No favorites yet"));

        screen.records = vec![];
        screen.meals = vec![detail_with_slots("1", "Apple Tart", &["apple"])];
        screen.set_filter("zzz");
        // Records present but nothing matches the filter.
        screen.records.push(crate::favorites::FavoriteRecord {
            id: uuid::Uuid::nil(),
            owner_id: uuid::Uuid::nil(),
            meal_id: "1".into(),
            meal_name: "Apple Tart".into(),
            meal_thumb: String::new(),
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        });
        assert!(render_favorites(&screen, &[]).contains("Try adjusting your search term"));
    }
}
