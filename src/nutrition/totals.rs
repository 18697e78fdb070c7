use crate::models::{NutritionPlan, PlanTotals};
use crate::nutrition::parsing::parse_nutrient;

/// Format an aggregate magnitude for display: nearest whole unit, no
/// suffix. Units (g / kcal) are added by the rendering surface.
fn format_total(value: f64) -> String {
    format!("{:.0}", value)
}

/// Recompute the four aggregate totals from the per-meal nutrient text.
///
/// Each dimension is the sum of [`parse_nutrient`] over all six slots in
/// display order. Calories are summed from the stored per-meal calorie
/// fields; the macro-derived estimate lives in
/// [`super::overview::calories_from_macros`] and is never written back
/// into a plan.
pub fn recompute_totals(plan: &NutritionPlan) -> PlanTotals {
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fats = 0.0;
    let mut calories = 0.0;

    for (_, entry) in plan.meals.iter() {
        protein += parse_nutrient(&entry.protein);
        carbs += parse_nutrient(&entry.carbs);
        fats += parse_nutrient(&entry.fats);
        calories += parse_nutrient(&entry.calories);
    }

    PlanTotals {
        protein: format_total(protein),
        carbs: format_total(carbs),
        fats: format_total(fats),
        calories: format_total(calories),
    }
}

/// Copy of the plan with freshly recomputed totals.
pub fn with_recomputed_totals(plan: &NutritionPlan) -> NutritionPlan {
    let mut updated = plan.clone();
    updated.totals = recompute_totals(plan);
    updated
}

/// Whether the stored totals match a fresh recompute pass.
pub fn totals_consistent(plan: &NutritionPlan) -> bool {
    plan.totals == recompute_totals(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealField;
    use crate::nutrition::default_plan;

    #[test]
    fn test_default_plan_totals_are_consistent() {
        assert!(totals_consistent(&default_plan()));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let plan = default_plan();
        let once = recompute_totals(&plan);
        let twice = recompute_totals(&with_recomputed_totals(&plan));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recompute_does_not_mutate_meals() {
        let plan = default_plan();
        let before = plan.meals.clone();
        let _ = recompute_totals(&plan);
        assert_eq!(plan.meals, before);
    }

    #[test]
    fn test_malformed_entries_count_as_zero() {
        let mut plan = default_plan();
        plan.meals.lunch.protein = "abc".to_string();
        plan.meals.dinner.protein = String::new();

        // Default lunch protein is 35, dinner 30; both now contribute 0.
        let totals = recompute_totals(&plan);
        assert_eq!(totals.protein, "48");
    }

    #[test]
    fn test_unit_suffixes_are_tolerated() {
        let mut plan = default_plan();
        plan.meals.breakfast.protein = "8g".to_string();
        let totals = recompute_totals(&plan);
        assert_eq!(totals.protein, "113");
    }

    #[test]
    fn test_all_empty_fields_recompute_to_zero() {
        let mut plan = default_plan();
        for slot in crate::models::MealSlot::ALL {
            for field in MealField::ALL {
                if field.is_nutrient() {
                    plan.meals.entry_mut(slot).set(field, "");
                }
            }
        }

        let totals = recompute_totals(&plan);
        assert_eq!(totals.protein, "0");
        assert_eq!(totals.carbs, "0");
        assert_eq!(totals.fats, "0");
        assert_eq!(totals.calories, "0");
    }

    #[test]
    fn test_fractional_sums_round_to_whole_units() {
        let mut plan = default_plan();
        plan.meals.snack1.fats = "0.4".to_string();
        let totals = recompute_totals(&plan);
        // 27 + 0.4 rounds back down to 27.
        assert_eq!(totals.fats, "27");
    }
}
