use crate::models::{MealEntry, Meals, NutritionPlan, PlanTotals};

/// Placeholder trainee name for a fresh plan.
pub const DEFAULT_TRAINEE_NAME: &str = "John Doe";

/// Fixed label for the early-morning row.
pub const EMPTY_STOMACH_LABEL: &str = "Empty stomach";

/// The built-in starter plan.
///
/// Totals are precomputed constants, not derived at call time; they must
/// stay in sync with the meal values (checked by test).
pub fn default_plan() -> NutritionPlan {
    NutritionPlan {
        trainee_name: DEFAULT_TRAINEE_NAME.to_string(),
        meals: Meals {
            early_morning: MealEntry::new(EMPTY_STOMACH_LABEL, "1 glass", "0", "0", "0", "0"),
            breakfast: MealEntry::new("Apple-Cinnamon Oatmeal", "1 bowl", "8", "45", "3", "240"),
            snack1: MealEntry::new("Greek Yogurt with Berries", "1 cup", "15", "12", "0", "110"),
            lunch: MealEntry::new("Grilled Chicken Salad", "1 plate", "35", "20", "10", "310"),
            pre_workout: MealEntry::new("Protein Shake with Banana", "1 shake", "25", "30", "2", "240"),
            dinner: MealEntry::new("Salmon with Quinoa", "1 plate", "30", "25", "12", "330"),
        },
        totals: PlanTotals {
            protein: "113".to_string(),
            carbs: "132".to_string(),
            fats: "27".to_string(),
            calories: "1230".to_string(),
        },
    }
}
