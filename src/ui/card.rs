use futures::future::join_all;
use rand::Rng;
use uuid::Uuid;

use crate::catalog::MealSummary;
use crate::favorites::FavoritesStore;

/// One recipe card. The minutes/servings figures are rolled fresh on every
/// render; the deterministic cook time belongs to the detail screen and
/// the two are not reconciled.
pub fn render_card(index: usize, meal: &MealSummary, favorite: bool) -> String {
    let mut rng = rand::thread_rng();
    let estimated_minutes: u32 = rng.gen_range(15..45);
    let servings: u32 = rng.gen_range(2..6);
    let heart = if favorite { "[♥]" } else { "[ ]" };

    let mut card = format!(
        "  {index:>2}. {heart} {}\n        ~{estimated_minutes} mins · {servings} servings",
        meal.name
    );
    if let Some(category) = meal.category.as_deref() {
        card.push_str(&format!(" · {category}"));
    }
    card
}

/// Every card checks its own favorite flag against the store; there is no
/// shared cache to consult.
pub async fn favorite_flags(
    store: &dyn FavoritesStore,
    owner: Uuid,
    meals: &[&MealSummary],
) -> Vec<bool> {
    join_all(meals.iter().map(|m| store.exists(owner, &m.id))).await
}

pub fn render_card_grid(meals: &[&MealSummary], flags: &[bool]) -> String {
    meals
        .iter()
        .enumerate()
        .map(|(i, meal)| render_card(i + 1, meal, flags.get(i).copied().unwrap_or(false)))
        .collect::<Vec<_>>()
        .join("\n")
}
