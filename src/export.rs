use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::models::NutritionPlan;

/// Standing advice sections printed on every sheet.
const IMPORTANT_TIPS: [&str; 4] = [
    "Never slip into starvation mode. Keep meal gaps between 3-4 hours so \
     your metabolism stays active.",
    "For a change in lunch and dinner, add low-carbohydrate vegetables like \
     spinach, carrot, onions, tomatoes, broccoli, cabbage, cauliflower, \
     capsicum and mushrooms.",
    "Vegetarian protein sources: paneer, tofu, soya chunks, chickpeas, \
     lentils and legumes.",
    "Cooking oils: olive oil, ghee, mustard oil.",
];

const MIXED_SALADS: [&str; 3] = [
    "Must add one medium tomato and onion.",
    "Half cucumber + capsicum or any other low-carbohydrate vegetable; add \
     pepper, salt and a squeeze of lemon for taste.",
    "Daily water intake should be at least 3-5 litres.",
];

const BRAIN_FOODS: [&str; 8] = [
    "Eggs (protein plus choline for memory development)",
    "Spinach (growth of new brain cells)",
    "Fish (vitamin D and omega 3 for focus)",
    "Seeds (keep the nervous system in check)",
    "Cereals (clear arteries, brain memory)",
    "Peanuts or almonds (vitamin E and thiamin)",
    "Milk (protein and B vitamins for brain tissue)",
    "Soybeans (growth of bones and muscles)",
];

const RULE: &str =
    "------------------------------------------------------------------------------";

/// Default export file name for a trainee, e.g. `diet-plan-jane-roe.txt`.
pub fn export_filename(trainee: &str, extension: &str) -> String {
    let slug = trainee
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("diet-plan-{}.{}", slug, extension)
}

fn write_table(out: &mut String, plan: &NutritionPlan) {
    let _ = writeln!(
        out,
        "{:<14} {:<40} {:<20} {:>8} {:>8} {:>8} {:>10}",
        "Meal", "Food Item", "Quantity", "Protein", "Carbs", "Fats", "Calories"
    );
    let _ = writeln!(out, "{}", RULE);

    for (slot, entry) in plan.meals.iter() {
        let _ = writeln!(
            out,
            "{:<14} {:<40} {:<20} {:>8} {:>8} {:>8} {:>10}",
            slot.label(),
            entry.name,
            entry.quantity,
            entry.protein,
            entry.carbs,
            entry.fats,
            entry.calories
        );
    }

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "{:<14} {:<40} {:<20} {:>7}g {:>7}g {:>7}g {:>5} kcal",
        "Daily Totals",
        "",
        "",
        plan.totals.protein,
        plan.totals.carbs,
        plan.totals.fats,
        plan.totals.calories
    );
}

fn write_section(out: &mut String, title: &str, lines: &[&str], numbered: bool) {
    let _ = writeln!(out, "{}", title);
    for (index, line) in lines.iter().enumerate() {
        if numbered {
            let _ = writeln!(out, "  {}. {}", index + 1, line);
        } else {
            let _ = writeln!(out, "  - {}", line);
        }
    }
    let _ = writeln!(out);
}

/// Render the printable plain-text nutrition sheet: header, meal table
/// with totals, and the standing advice sections.
pub fn render_plan_document(plan: &NutritionPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "NUTRITION PLAN");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Trainee: {}", plan.trainee_name);
    let _ = writeln!(out);

    write_table(&mut out, plan);
    let _ = writeln!(out);

    write_section(&mut out, "Important tips:", &IMPORTANT_TIPS, true);
    write_section(&mut out, "Mixed salads:", &MIXED_SALADS, false);
    write_section(&mut out, "Food for brain & strong bones:", &BRAIN_FOODS, false);

    out
}

/// Write the meal table (six rows plus totals) as CSV.
pub fn write_plan_csv<P: AsRef<Path>>(path: P, plan: &NutritionPlan) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Meal",
        "Food Item",
        "Quantity",
        "Protein (g)",
        "Carbs (g)",
        "Fats (g)",
        "Calories",
    ])?;

    for (slot, entry) in plan.meals.iter() {
        writer.write_record([
            slot.label(),
            entry.name.as_str(),
            entry.quantity.as_str(),
            entry.protein.as_str(),
            entry.carbs.as_str(),
            entry.fats.as_str(),
            entry.calories.as_str(),
        ])?;
    }

    writer.write_record([
        "Daily Totals",
        "",
        "",
        plan.totals.protein.as_str(),
        plan.totals.carbs.as_str(),
        plan.totals.fats.as_str(),
        plan.totals.calories.as_str(),
    ])?;

    writer.flush()?;
    Ok(())
}
