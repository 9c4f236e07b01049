use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::app::{Nav, Page, SearchMode};
use crate::screens::detail::DetailTab;
use crate::screens::favorites::SortOrder;
use crate::screens::search::{CookingTime, DietaryPreference, MoodType};
use crate::screens::{
    toggle_card_favorite, DetailScreen, FavoritesScreen, HomeScreen, SearchScreen,
};
use crate::state::AppState;
use crate::ui::{card, layout, pages};

/// The screen currently mounted. Rebuilt from scratch on every navigation,
/// which is what makes all per-screen state ephemeral.
pub enum ActiveScreen {
    Home(HomeScreen),
    Search(SearchScreen),
    Favorites(FavoritesScreen),
    Detail(DetailScreen),
}

/// Builds the screen for the current page and runs its entry loads.
pub async fn enter(nav: &Nav, state: &AppState) -> ActiveScreen {
    let owner = state.config.owner_id;
    match nav.page() {
        Page::Home => {
            let mut screen = HomeScreen::new();
            screen.load(&*state.catalog).await;
            ActiveScreen::Home(screen)
        }
        Page::Search => {
            let mut screen = SearchScreen::new(nav.search_hint());
            screen.ensure_initial(&*state.catalog).await;
            ActiveScreen::Search(screen)
        }
        Page::Favorites => {
            let mut screen = FavoritesScreen::new();
            screen
                .load(&*state.catalog, &*state.favorites, owner)
                .await;
            ActiveScreen::Favorites(screen)
        }
        Page::Detail => {
            let meal_id = nav.selected_meal_id().unwrap_or_default().to_string();
            let mut screen = DetailScreen::new(meal_id);
            screen
                .load(&*state.catalog, &*state.favorites, owner)
                .await;
            ActiveScreen::Detail(screen)
        }
    }
}

pub async fn render(nav: &Nav, screen: &ActiveScreen, state: &AppState) -> String {
    let owner = state.config.owner_id;
    let mut out = String::new();
    if nav.chrome_visible() {
        out.push_str(&layout::render_header(nav.page()));
    }
    match screen {
        ActiveScreen::Home(s) => {
            let meals: Vec<_> = s.suggestions.iter().collect();
            let flags = card::favorite_flags(&*state.favorites, owner, &meals).await;
            out.push_str(&pages::render_home(s, &flags));
        }
        ActiveScreen::Search(s) => {
            let meals: Vec<_> = s.results.iter().collect();
            let flags = card::favorite_flags(&*state.favorites, owner, &meals).await;
            out.push_str(&pages::render_search(s, &flags));
        }
        ActiveScreen::Favorites(s) => {
            let meals: Vec<_> = s.filtered().iter().map(|m| &m.summary).collect();
            let flags = card::favorite_flags(&*state.favorites, owner, &meals).await;
            out.push_str(&pages::render_favorites(s, &flags));
        }
        ActiveScreen::Detail(s) => {
            out.push_str(&pages::render_detail(s));
        }
    }
    out
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    }
}

/// 1-based card index as typed.
fn parse_index(rest: &str) -> Option<usize> {
    rest.parse::<usize>().ok().filter(|n| *n >= 1).map(|n| n - 1)
}

/// Applies one typed command to the current screen, re-entering a fresh
/// screen whenever the command navigates.
pub async fn handle(line: &str, nav: &mut Nav, screen: &mut ActiveScreen, state: &AppState) {
    let owner = state.config.owner_id;
    let (cmd, rest) = split_command(line);

    match screen {
        ActiveScreen::Home(home) => match cmd {
            "refresh" => home.load(&*state.catalog).await,
            // The three shortcut tiles; "kitchen" is an alias for the first.
            "kitchen" | "ingredients" | "mood" | "time" => {
                let hint = SearchMode::parse(cmd).unwrap_or(SearchMode::Ingredients);
                nav.navigate(Page::Search, Some(hint));
                *screen = enter(nav, state).await;
            }
            "fav" => {
                if let Some(meal) = parse_index(rest).and_then(|i| home.suggestions.get(i)) {
                    toggle_card_favorite(&*state.favorites, owner, meal).await;
                }
            }
            _ => global_nav(cmd, nav, screen, state).await,
        },

        ActiveScreen::Search(search) => match cmd {
            "add" => {
                if search.add_ingredient(rest) {
                    search.debounced_query(&*state.catalog).await;
                }
            }
            "rm" | "remove" => {
                if search.remove_ingredient(rest) {
                    search.debounced_query(&*state.catalog).await;
                }
            }
            "exclude" => {
                search.add_excluded(rest);
            }
            "term" => {
                search.set_term(rest);
                search.debounced_query(&*state.catalog).await;
            }
            "mood" => {
                if let Some(mood) = MoodType::parse(rest) {
                    search.toggle_mood(mood);
                }
            }
            "time" => {
                if let Some(bucket) = CookingTime::parse(rest) {
                    search.set_time_filter(bucket);
                }
            }
            "diet" => {
                if let Some(pref) = DietaryPreference::parse(rest) {
                    search.toggle_dietary(pref);
                }
            }
            "apply" => search.run_query(&*state.catalog).await,
            "reset" => search.reset(),
            "open" => {
                let meal_id =
                    parse_index(rest).and_then(|i| search.results.get(i).map(|m| m.id.clone()));
                if let Some(meal_id) = meal_id {
                    nav.select_meal(meal_id);
                    *screen = enter(nav, state).await;
                }
            }
            "fav" => {
                if let Some(meal) = parse_index(rest).and_then(|i| search.results.get(i)) {
                    toggle_card_favorite(&*state.favorites, owner, meal).await;
                }
            }
            _ => global_nav(cmd, nav, screen, state).await,
        },

        ActiveScreen::Favorites(favorites) => match cmd {
            "filter" => favorites.set_filter(rest),
            "sort" => {
                if let Some(order) = SortOrder::parse(rest) {
                    favorites.set_sort(order);
                }
            }
            "open" => {
                let meal_id = parse_index(rest)
                    .and_then(|i| favorites.filtered().get(i).map(|m| m.summary.id.clone()));
                if let Some(meal_id) = meal_id {
                    nav.select_meal(meal_id);
                    *screen = enter(nav, state).await;
                }
            }
            "fav" => {
                let meal = parse_index(rest)
                    .and_then(|i| favorites.filtered().get(i).map(|m| m.summary.clone()));
                if let Some(meal) = meal {
                    toggle_card_favorite(&*state.favorites, owner, &meal).await;
                    // A removal reloads the whole list rather than patching it.
                    favorites
                        .load(&*state.catalog, &*state.favorites, owner)
                        .await;
                }
            }
            _ => global_nav(cmd, nav, screen, state).await,
        },

        ActiveScreen::Detail(detail) => match cmd {
            "back" => {
                nav.back();
                *screen = enter(nav, state).await;
            }
            "tab" => {
                if let Some(tab) = DetailTab::parse(rest) {
                    detail.set_tab(tab);
                }
            }
            "check" => {
                if let Some(index) = parse_index(rest) {
                    detail.toggle_ingredient(index);
                }
            }
            "fav" => detail.toggle_favorite(&*state.favorites, owner).await,
            // No nav bar in Detail: the only way out is back.
            other => debug!(command = other, "ignored command in detail"),
        },
    }
}

/// The persistent top bar, available on every screen except Detail.
async fn global_nav(cmd: &str, nav: &mut Nav, screen: &mut ActiveScreen, state: &AppState) {
    match cmd {
        "home" => nav.navigate(Page::Home, None),
        "search" | "recipes" => nav.navigate(Page::Search, None),
        "favorites" => nav.navigate(Page::Favorites, None),
        other => {
            debug!(command = other, "unknown command");
            return;
        }
    }
    *screen = enter(nav, state).await;
}

pub async fn run(state: AppState) -> anyhow::Result<()> {
    let mut nav = Nav::new();
    let mut screen = enter(&nav, &state).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        println!("{}", render(&nav, &screen, &state).await);
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        handle(&line, &mut nav, &mut screen, &state).await;
    }
    Ok(())
}
