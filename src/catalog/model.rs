use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Catalog records expose ingredient/measure pairs as numbered field pairs,
/// `strIngredient1`/`strMeasure1` through this slot count.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Envelope shared by every catalog endpoint. `meals` is JSON null (or
/// absent) when nothing matched.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    pub meals: Option<Vec<MealSummary>>,
}

/// One meal as the catalog returns it. Fields the application does not
/// recognize (the numbered ingredient slots included) are kept verbatim in
/// `extra` so nothing is lost between fetch and re-serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
    #[serde(rename = "strCategory", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "strArea", skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(rename = "strTags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Option<String>>,
}

impl MealSummary {
    /// First two comma-separated tags, trimmed, for the detail header chips.
    pub fn tag_chips(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|t| t.split(',').map(str::trim).take(2).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: String,
}

/// A summary plus the flattened ingredient list derived from its slots.
#[derive(Debug, Clone, PartialEq)]
pub struct MealDetail {
    pub summary: MealSummary,
    pub ingredients: Vec<IngredientLine>,
}

impl MealDetail {
    /// Scans slots 1..=20 in ascending order, keeping only slots whose
    /// ingredient is non-empty after trimming. Missing or null measures
    /// become the empty string.
    pub fn from_summary(summary: MealSummary) -> Self {
        let mut ingredients = Vec::new();
        for slot in 1..=MAX_INGREDIENT_SLOTS {
            let ingredient = summary
                .extra
                .get(&format!("strIngredient{slot}"))
                .and_then(|v| v.as_deref())
                .map(str::trim)
                .unwrap_or("");
            if ingredient.is_empty() {
                continue;
            }
            let measure = summary
                .extra
                .get(&format!("strMeasure{slot}"))
                .and_then(|v| v.as_deref())
                .map(str::trim)
                .unwrap_or("");
            ingredients.push(IngredientLine {
                ingredient: ingredient.to_string(),
                measure: measure.to_string(),
            });
        }
        Self { summary, ingredients }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal_json(extra: serde_json::Value) -> MealSummary {
        let mut value = serde_json::json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://example.test/teriyaki.jpg",
            "strCategory": "Chicken",
            "strArea": "Japanese",
        });
        value
            .as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(value).expect("meal should deserialize")
    }

    #[test]
    fn envelope_with_null_meals_is_empty() {
        let env: MealsEnvelope = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(env.meals.is_none());
    }

    #[test]
    fn summary_keeps_unknown_fields_in_extra() {
        let meal = meal_json(serde_json::json!({
            "strSource": "https://example.test/source",
            "dateModified": null,
        }));
        assert_eq!(
            meal.extra.get("strSource"),
            Some(&Some("https://example.test/source".to_string()))
        );
        assert_eq!(meal.extra.get("dateModified"), Some(&None));
    }

    #[test]
    fn ingredient_extraction_keeps_non_blank_slots_in_slot_order() {
        let meal = meal_json(serde_json::json!({
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "   ",
            "strMeasure2": "ignored",
            "strIngredient3": "brown sugar",
            "strMeasure3": null,
            "strIngredient4": "",
            "strIngredient10": "sesame seed",
        }));
        let detail = MealDetail::from_summary(meal);
        assert_eq!(
            detail.ingredients,
            vec![
                IngredientLine {
                    ingredient: "soy sauce".into(),
                    measure: "3/4 cup".into()
                },
                IngredientLine {
                    ingredient: "brown sugar".into(),
                    measure: "".into()
                },
                IngredientLine {
                    ingredient: "sesame seed".into(),
                    measure: "".into()
                },
            ]
        );
    }

    #[test]
    fn ingredient_extraction_trims_names_and_measures() {
        let meal = meal_json(serde_json::json!({
            "strIngredient1": "  chicken breast  ",
            "strMeasure1": " 2 lbs ",
        }));
        let detail = MealDetail::from_summary(meal);
        assert_eq!(detail.ingredients.len(), 1);
        assert_eq!(detail.ingredients[0].ingredient, "chicken breast");
        assert_eq!(detail.ingredients[0].measure, "2 lbs");
    }

    #[test]
    fn ingredient_extraction_ignores_slots_past_twenty() {
        let meal = meal_json(serde_json::json!({
            "strIngredient1": "rice",
            "strIngredient21": "should not appear",
        }));
        let detail = MealDetail::from_summary(meal);
        assert_eq!(detail.ingredients.len(), 1);
        assert_eq!(detail.ingredients[0].ingredient, "rice");
    }

    #[test]
    fn tag_chips_takes_first_two_trimmed() {
        let meal = meal_json(serde_json::json!({
            "strTags": "Meat, Casserole ,Weeknight",
        }));
        assert_eq!(meal.tag_chips(), vec!["Meat", "Casserole"]);
    }
}
