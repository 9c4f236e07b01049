pub mod detail;
pub mod favorites;
pub mod home;
pub mod search;

pub use detail::DetailScreen;
pub use favorites::FavoritesScreen;
pub use home::HomeScreen;
pub use search::SearchScreen;

use uuid::Uuid;

use crate::catalog::MealSummary;
use crate::favorites::FavoritesStore;

/// The heart button on a card. The current state is re-verified against the
/// store right before flipping it; nothing is cached app-side, so two
/// visible cards for the same meal only agree after each re-queries.
/// Returns the new favorite state.
pub async fn toggle_card_favorite(
    store: &dyn FavoritesStore,
    owner: Uuid,
    meal: &MealSummary,
) -> bool {
    if store.exists(owner, &meal.id).await {
        store.remove(owner, &meal.id).await;
        false
    } else {
        store
            .add(owner, &meal.id, &meal.name, &meal.thumbnail)
            .await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{meal, MemoryFavorites};

    #[tokio::test]
    async fn toggle_twice_leaves_no_favorite() {
        let store = MemoryFavorites::new();
        let owner = Uuid::nil();
        let m = meal("52772", "Teriyaki Chicken Casserole");

        assert!(toggle_card_favorite(&store, owner, &m).await);
        assert!(store.exists(owner, "52772").await);

        assert!(!toggle_card_favorite(&store, owner, &m).await);
        assert!(!store.exists(owner, "52772").await);
        assert!(store
            .list(owner)
            .await
            .iter()
            .all(|r| r.meal_id != "52772"));
    }

    #[tokio::test]
    async fn toggle_is_owner_scoped() {
        let store = MemoryFavorites::new();
        let taylor = Uuid::from_u128(1);
        let guest = Uuid::from_u128(2);
        let m = meal("52772", "Teriyaki Chicken Casserole");

        toggle_card_favorite(&store, taylor, &m).await;
        assert!(store.exists(taylor, "52772").await);
        assert!(!store.exists(guest, "52772").await);
    }
}
