use crate::models::PlanTotals;
use crate::nutrition::parsing::parse_nutrient;

/// Kilocalories per gram of each macronutrient (Atwater factors).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FATS: f64 = 9.0;

/// Macro share of total grams, in whole percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// Percentage breakdown of the three macros by gram weight.
///
/// All zero when the totals carry no grams at all.
pub fn macro_split(totals: &PlanTotals) -> MacroSplit {
    let protein = parse_nutrient(&totals.protein);
    let carbs = parse_nutrient(&totals.carbs);
    let fats = parse_nutrient(&totals.fats);

    let total = protein + carbs + fats;
    if total == 0.0 {
        return MacroSplit::default();
    }

    MacroSplit {
        protein: (protein / total * 100.0).round() as u32,
        carbs: (carbs / total * 100.0).round() as u32,
        fats: (fats / total * 100.0).round() as u32,
    }
}

/// Advisory calorie figure derived from macro grams (4/4/9 rule).
///
/// Display-only: the stored calorie total always comes from the per-meal
/// calorie fields, and the two figures legitimately disagree when the
/// entered calories do not match the entered macros.
pub fn calories_from_macros(totals: &PlanTotals) -> f64 {
    (parse_nutrient(&totals.protein) * KCAL_PER_GRAM_PROTEIN
        + parse_nutrient(&totals.carbs) * KCAL_PER_GRAM_CARBS
        + parse_nutrient(&totals.fats) * KCAL_PER_GRAM_FATS)
        .round()
}
