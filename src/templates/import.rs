use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::MealEntry;
use crate::templates::catalog::{MealTemplate, TemplateCategory};

/// One CSV row: `category,name,quantity,protein,carbs,fats,calories`.
#[derive(Debug, Deserialize)]
struct TemplateRow {
    category: String,
    name: String,
    quantity: String,
    protein: String,
    carbs: String,
    fats: String,
    calories: String,
}

/// Load extra templates from a trainer-maintained CSV file.
///
/// Rows with an unknown category fail the whole import; nutrient text is
/// taken as-is (suffixes and all), same as the built-in catalog.
pub fn load_templates_csv<P: AsRef<Path>>(path: P) -> Result<Vec<MealTemplate>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut templates = Vec::new();

    for row in reader.deserialize() {
        let row: TemplateRow = row?;
        let category: TemplateCategory = row.category.parse()?;
        templates.push(MealTemplate {
            category,
            meal: MealEntry::new(
                &row.name,
                &row.quantity,
                &row.protein,
                &row.carbs,
                &row.fats,
                &row.calories,
            ),
        });
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_round_trip() {
        let csv = "category,name,quantity,protein,carbs,fats,calories\n\
                   breakfast,Overnight Oats,1 jar,12g,40g,6g,260\n\
                   snacks,Apple with Peanut Butter,1 + 2 tbsp,7g,25g,16g,270\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let templates = load_templates_csv(file.path()).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].category, TemplateCategory::Breakfast);
        assert_eq!(templates[0].meal.name, "Overnight Oats");
        assert_eq!(templates[1].category, TemplateCategory::Snacks);
        assert_eq!(templates[1].meal.fats, "16g");
    }

    #[test]
    fn test_unknown_category_fails_import() {
        let csv = "category,name,quantity,protein,carbs,fats,calories\n\
                   brunch,Eggs Benedict,1 plate,20g,30g,25g,450\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let err = load_templates_csv(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::PlanError::UnknownCategory(c) if c == "brunch"));
    }
}
