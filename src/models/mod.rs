pub mod meal;
pub mod plan;

pub use meal::{MealEntry, MealField, MealSlot};
pub use plan::{Meals, NutritionPlan, PlanTotals};
