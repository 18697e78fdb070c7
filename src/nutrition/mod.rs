pub mod defaults;
pub mod editing;
pub mod overview;
pub mod parsing;
pub mod totals;

pub use defaults::{default_plan, DEFAULT_TRAINEE_NAME, EMPTY_STOMACH_LABEL};
pub use editing::{apply_template, set_meal_field, set_meal_field_by_key, EditPolicy};
pub use overview::{calories_from_macros, macro_split, MacroSplit};
pub use parsing::parse_nutrient;
pub use totals::{recompute_totals, totals_consistent, with_recomputed_totals};
