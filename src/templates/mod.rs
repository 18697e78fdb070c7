pub mod catalog;
pub mod import;

pub use catalog::{built_in_templates, find_templates, MealTemplate, TemplateCategory};
pub use import::load_templates_csv;
