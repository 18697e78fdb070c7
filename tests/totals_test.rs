use assert_float_eq::*;

use diet_plan_builder_rs::models::{MealField, MealSlot};
use diet_plan_builder_rs::nutrition::{
    apply_template, default_plan, parse_nutrient, recompute_totals, set_meal_field,
    totals_consistent, with_recomputed_totals, EditPolicy,
};
use diet_plan_builder_rs::templates::built_in_templates;

#[test]
fn test_parse_nutrient_contract() {
    assert_float_absolute_eq!(parse_nutrient("15g"), 15.0);
    assert_float_absolute_eq!(parse_nutrient(""), 0.0);
    assert_float_absolute_eq!(parse_nutrient("abc"), 0.0);
    assert_float_absolute_eq!(parse_nutrient("12.5"), 12.5);
    assert_float_absolute_eq!(parse_nutrient("310"), 310.0);
}

#[test]
fn test_recompute_is_idempotent_for_arbitrary_text() {
    let mut plan = default_plan();
    plan.meals.breakfast.protein = "8g".to_string();
    plan.meals.snack1.carbs = "oops".to_string();
    plan.meals.dinner.fats = String::new();

    let once = recompute_totals(&plan);
    let twice = recompute_totals(&with_recomputed_totals(&plan));
    assert_eq!(once, twice);
}

#[test]
fn test_totals_equal_per_dimension_sums() {
    let mut plan = default_plan();
    plan.meals.lunch.protein = "40g".to_string();
    plan.meals.pre_workout.carbs = "not a number".to_string();
    plan.meals.early_morning.calories = "50 kcal".to_string();

    let totals = recompute_totals(&plan);

    let expected_protein: f64 = plan
        .meals
        .iter()
        .map(|(_, entry)| parse_nutrient(&entry.protein))
        .sum();
    let expected_calories: f64 = plan
        .meals
        .iter()
        .map(|(_, entry)| parse_nutrient(&entry.calories))
        .sum();

    assert_float_absolute_eq!(parse_nutrient(&totals.protein), expected_protein.round());
    assert_float_absolute_eq!(parse_nutrient(&totals.calories), expected_calories.round());
}

#[test]
fn test_default_plan_is_internally_consistent() {
    assert!(totals_consistent(&default_plan()));
}

#[test]
fn test_all_empty_plan_totals_are_zero() {
    let mut plan = default_plan();
    for slot in MealSlot::ALL {
        for field in [
            MealField::Protein,
            MealField::Carbs,
            MealField::Fats,
            MealField::Calories,
        ] {
            plan.meals.entry_mut(slot).set(field, "");
        }
    }

    let totals = recompute_totals(&plan);
    assert_eq!(totals.protein, "0");
    assert_eq!(totals.carbs, "0");
    assert_eq!(totals.fats, "0");
    assert_eq!(totals.calories, "0");
}

#[test]
fn test_lunch_protein_edit_moves_total_by_the_difference() {
    let plan = default_plan();
    let old_lunch_protein = parse_nutrient(&plan.meals.lunch.protein);
    let old_total = parse_nutrient(&plan.totals.protein);

    let updated = set_meal_field(
        &plan,
        MealSlot::Lunch,
        MealField::Protein,
        "40",
        &EditPolicy::standard(),
    )
    .unwrap();
    let updated = with_recomputed_totals(&updated);

    let new_total = parse_nutrient(&updated.totals.protein);
    assert_float_absolute_eq!(new_total - old_total, 40.0 - old_lunch_protein);
}

#[test]
fn test_breakfast_template_moves_calorie_total() {
    let plan = default_plan();
    let old_breakfast_calories = parse_nutrient(&plan.meals.breakfast.calories);
    let old_total = parse_nutrient(&plan.totals.calories);

    let templates = built_in_templates();
    let pancakes = templates
        .iter()
        .find(|t| t.meal.name == "Protein Pancakes")
        .unwrap();
    assert_eq!(pancakes.meal.calories, "290");

    let updated = apply_template(&plan, MealSlot::Breakfast, &pancakes.meal);
    let updated = with_recomputed_totals(&updated);

    let new_total = parse_nutrient(&updated.totals.calories);
    assert_float_absolute_eq!(new_total, old_total - old_breakfast_calories + 290.0);
}

#[test]
fn test_template_totals_equal_template_plus_other_slots() {
    let plan = default_plan();
    let templates = built_in_templates();
    let wrap = templates
        .iter()
        .find(|t| t.meal.name == "Tuna Wrap")
        .unwrap();

    let updated = with_recomputed_totals(&apply_template(&plan, MealSlot::Lunch, &wrap.meal));

    let others: f64 = plan
        .meals
        .iter()
        .filter(|(slot, _)| *slot != MealSlot::Lunch)
        .map(|(_, entry)| parse_nutrient(&entry.protein))
        .sum();
    let expected = others + parse_nutrient(&wrap.meal.protein);

    assert_float_absolute_eq!(parse_nutrient(&updated.totals.protein), expected.round());
}
