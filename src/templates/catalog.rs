use std::fmt;
use std::str::FromStr;

use strsim::jaro_winkler;

use crate::error::PlanError;
use crate::models::{MealEntry, MealSlot};

/// Similarity floor for fuzzy template lookup.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Catalog grouping for quick meal templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 4] = [
        TemplateCategory::Breakfast,
        TemplateCategory::Lunch,
        TemplateCategory::Dinner,
        TemplateCategory::Snacks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::Breakfast => "Breakfast",
            TemplateCategory::Lunch => "Lunch",
            TemplateCategory::Dinner => "Dinner",
            TemplateCategory::Snacks => "Snacks",
        }
    }

    /// Default slot a template of this category lands in. Snack templates
    /// default to the mid-morning snack; the pre-workout slot is offered
    /// as the alternate at apply time.
    pub fn target_slot(&self) -> MealSlot {
        match self {
            TemplateCategory::Breakfast => MealSlot::Breakfast,
            TemplateCategory::Lunch => MealSlot::Lunch,
            TemplateCategory::Dinner => MealSlot::Dinner,
            TemplateCategory::Snacks => MealSlot::Snack1,
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TemplateCategory {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(TemplateCategory::Breakfast),
            "lunch" => Ok(TemplateCategory::Lunch),
            "dinner" => Ok(TemplateCategory::Dinner),
            "snacks" | "snack" => Ok(TemplateCategory::Snacks),
            _ => Err(PlanError::UnknownCategory(s.to_string())),
        }
    }
}

/// A quick meal preset a trainer can drop into a plan slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealTemplate {
    pub category: TemplateCategory,
    pub meal: MealEntry,
}

impl MealTemplate {
    fn new(
        category: TemplateCategory,
        name: &str,
        quantity: &str,
        protein: &str,
        carbs: &str,
        fats: &str,
        calories: &str,
    ) -> Self {
        Self {
            category,
            meal: MealEntry::new(name, quantity, protein, carbs, fats, calories),
        }
    }
}

/// The built-in template catalog. Nutrient text keeps the unit suffixes
/// the presets were authored with; parsing strips them at recompute time.
pub fn built_in_templates() -> Vec<MealTemplate> {
    use TemplateCategory::*;

    vec![
        MealTemplate::new(Breakfast, "Apple-Cinnamon Oatmeal", "1 bowl", "5g", "30g", "3g", "170"),
        MealTemplate::new(Breakfast, "Greek Yogurt with Berries", "1 cup", "15g", "12g", "0g", "110"),
        MealTemplate::new(Breakfast, "Protein Pancakes", "3 medium", "25g", "30g", "8g", "290"),
        MealTemplate::new(Breakfast, "Egg White Omelet", "1 large", "18g", "2g", "5g", "125"),
        MealTemplate::new(Lunch, "Grilled Chicken Salad", "1 plate", "25g", "15g", "8g", "320"),
        MealTemplate::new(Lunch, "Quinoa Bowl with Tofu", "1 bowl", "15g", "40g", "10g", "310"),
        MealTemplate::new(Lunch, "Tuna Wrap", "1 wrap", "22g", "25g", "6g", "280"),
        MealTemplate::new(Dinner, "Baked Salmon with Vegetables", "150g + 100g", "30g", "10g", "15g", "350"),
        MealTemplate::new(Dinner, "Turkey Meatballs with Zucchini Noodles", "200g", "28g", "8g", "12g", "320"),
        MealTemplate::new(Dinner, "Chickpea and Vegetable Curry", "1 bowl", "14g", "35g", "8g", "280"),
        MealTemplate::new(Snacks, "Protein Shake with Banana", "1 scoop + 1 medium", "20g", "25g", "1g", "200"),
        MealTemplate::new(Snacks, "Mixed Nuts", "30g", "5g", "5g", "15g", "170"),
        MealTemplate::new(Snacks, "Cottage Cheese with Berries", "100g + 50g", "12g", "6g", "2g", "120"),
    ]
}

/// Find templates by name.
///
/// An exact case-insensitive match wins outright; otherwise candidates
/// above the fuzzy threshold are returned best-first for the caller to
/// pick from.
pub fn find_templates<'a>(templates: &'a [MealTemplate], query: &str) -> Vec<&'a MealTemplate> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(exact) = templates
        .iter()
        .find(|t| t.meal.name.to_lowercase() == query)
    {
        return vec![exact];
    }

    let mut candidates: Vec<(&MealTemplate, f64)> = templates
        .iter()
        .map(|t| (t, jaro_winkler(&t.meal.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(t, _)| t).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_category() {
        let templates = built_in_templates();
        for category in TemplateCategory::ALL {
            assert!(
                templates.iter().any(|t| t.category == category),
                "no templates for {}",
                category
            );
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("breakfast".parse::<TemplateCategory>().unwrap(), TemplateCategory::Breakfast);
        assert_eq!("Snacks".parse::<TemplateCategory>().unwrap(), TemplateCategory::Snacks);
        assert_eq!("snack".parse::<TemplateCategory>().unwrap(), TemplateCategory::Snacks);

        let err = "brunch".parse::<TemplateCategory>().unwrap_err();
        assert!(matches!(err, crate::error::PlanError::UnknownCategory(_)));
    }

    #[test]
    fn test_snacks_target_mid_morning_slot() {
        assert_eq!(TemplateCategory::Snacks.target_slot(), MealSlot::Snack1);
        assert_eq!(TemplateCategory::Dinner.target_slot(), MealSlot::Dinner);
    }

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        let templates = built_in_templates();
        let found = find_templates(&templates, "protein pancakes");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].meal.name, "Protein Pancakes");
    }

    #[test]
    fn test_fuzzy_lookup_finds_near_miss() {
        let templates = built_in_templates();
        let found = find_templates(&templates, "protien pancakes");
        assert!(!found.is_empty());
        assert_eq!(found[0].meal.name, "Protein Pancakes");
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let templates = built_in_templates();
        assert!(find_templates(&templates, "   ").is_empty());
    }
}
