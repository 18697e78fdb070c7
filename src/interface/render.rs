use crate::checklist::DailyChecklist;
use crate::models::NutritionPlan;
use crate::nutrition::{calories_from_macros, macro_split};
use crate::templates::{MealTemplate, TemplateCategory};

/// Display a plan as a formatted table with a totals row.
pub fn display_plan(plan: &NutritionPlan) {
    println!();
    println!("=== Diet Plan: {} ===", plan.trainee_name);
    println!();

    let name_width = plan
        .meals
        .iter()
        .map(|(_, entry)| entry.name.len())
        .max()
        .unwrap_or(10)
        .max(9);

    println!(
        "{:<14} {:<width$} {:<20} {:>8} {:>8} {:>8} {:>10}",
        "Meal",
        "Food Item",
        "Quantity",
        "Protein",
        "Carbs",
        "Fats",
        "Calories",
        width = name_width
    );

    for (slot, entry) in plan.meals.iter() {
        println!(
            "{:<14} {:<width$} {:<20} {:>8} {:>8} {:>8} {:>10}",
            slot.label(),
            entry.name,
            entry.quantity,
            entry.protein,
            entry.carbs,
            entry.fats,
            entry.calories,
            width = name_width
        );
    }

    println!();
    println!(
        "Daily totals: {}g protein | {}g carbs | {}g fats | {} kcal",
        plan.totals.protein, plan.totals.carbs, plan.totals.fats, plan.totals.calories
    );
    println!();
}

/// Display the macro breakdown and the advisory 4/4/9 calorie estimate
/// next to the stored calorie total.
pub fn display_totals_overview(plan: &NutritionPlan) {
    let split = macro_split(&plan.totals);
    let estimated = calories_from_macros(&plan.totals);

    println!();
    println!("--- Nutritional Overview ---");
    println!(
        "Macro split: {}% protein / {}% carbs / {}% fats",
        split.protein, split.carbs, split.fats
    );
    println!("Calories (sum of meals): {} kcal", plan.totals.calories);
    println!("Calories (from macros, 4/4/9): {:.0} kcal", estimated);
    println!();
}

/// Display the template catalog grouped by category.
pub fn display_templates(templates: &[MealTemplate]) {
    if templates.is_empty() {
        println!("No templates available.");
        return;
    }

    for category in TemplateCategory::ALL {
        let in_category: Vec<&MealTemplate> = templates
            .iter()
            .filter(|t| t.category == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }

        println!();
        println!("=== {} ({} templates) ===", category, in_category.len());
        for template in in_category {
            let meal = &template.meal;
            println!(
                "  {} - {} | P: {} C: {} F: {} Cal: {}",
                meal.name, meal.quantity, meal.protein, meal.carbs, meal.fats, meal.calories
            );
        }
    }

    println!();
}

/// Display a checklist with completion marks and the compliance figure.
pub fn display_checklist(checklist: &DailyChecklist) {
    println!();
    println!("=== Daily Checklist: {} ===", checklist.trainee_name);
    println!();

    for (index, item) in checklist.items.iter().enumerate() {
        let mark = if item.completed { "x" } else { " " };
        println!("{:>3}. [{}] {}", index + 1, mark, item.text);
    }

    let (done, total) = checklist.completion();
    println!();
    println!(
        "Compliance: {}/{} ({:.0}%)",
        done,
        total,
        checklist.compliance_percent()
    );
    println!();
}
