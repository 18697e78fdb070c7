pub mod checklist;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;
pub mod templates;

pub use error::{PlanError, Result};
pub use models::{MealEntry, MealField, MealSlot, NutritionPlan};
