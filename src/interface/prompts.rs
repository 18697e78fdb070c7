use dialoguer::{Confirm, Input, Select};

use crate::checklist::DailyChecklist;
use crate::error::{PlanError, Result};
use crate::models::{MealField, MealSlot};
use crate::nutrition::DEFAULT_TRAINEE_NAME;
use crate::templates::{find_templates, MealTemplate};

/// Top-level action in the interactive editor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    EditField,
    ApplyTemplate,
    Overview,
    Reset,
    SaveAndQuit,
    Quit,
}

/// Action in the checklist loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistAction {
    Toggle,
    Add,
    Remove,
    SaveAndQuit,
    Quit,
}

/// Prompt for the trainee name a plan belongs to.
pub fn prompt_trainee_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Trainee name")
        .default(DEFAULT_TRAINEE_NAME.to_string())
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PlanError::InvalidInput("Trainee name is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Pick the next editor action.
pub fn prompt_edit_action() -> Result<EditAction> {
    let options = [
        "Edit a field",
        "Apply a template",
        "Recompute totals & overview",
        "Reset to default plan",
        "Save and quit",
        "Quit without saving",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => EditAction::EditField,
        1 => EditAction::ApplyTemplate,
        2 => EditAction::Overview,
        3 => EditAction::Reset,
        4 => EditAction::SaveAndQuit,
        _ => EditAction::Quit,
    })
}

/// Pick a meal slot.
pub fn prompt_slot() -> Result<MealSlot> {
    let options: Vec<String> = MealSlot::ALL
        .iter()
        .map(|slot| format!("{} ({})", slot.label(), slot.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("Which meal?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(MealSlot::ALL[selection])
}

/// Pick a meal slot with a preselected default.
pub fn prompt_target_slot(default: MealSlot) -> Result<MealSlot> {
    let options: Vec<&str> = MealSlot::ALL.iter().map(|slot| slot.label()).collect();
    let default_index = MealSlot::ALL
        .iter()
        .position(|&slot| slot == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Apply to which meal?")
        .items(&options)
        .default(default_index)
        .interact()?;

    Ok(MealSlot::ALL[selection])
}

/// Pick a meal field.
pub fn prompt_field() -> Result<MealField> {
    let options: Vec<&str> = MealField::ALL.iter().map(|field| field.label()).collect();

    let selection = Select::new()
        .with_prompt("Which field?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(MealField::ALL[selection])
}

/// Prompt for a new field value, defaulting to the current one.
///
/// Nutrient fields take anything; malformed text counts as zero at
/// recompute time, so there is nothing to validate here.
pub fn prompt_field_value(field: MealField, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("New value for {}", field.label()))
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Search the catalog by name and pick a template.
///
/// Exact match is taken directly; otherwise fuzzy candidates are offered
/// for selection. Returns None when nothing matches or the user backs out.
pub fn prompt_template(templates: &[MealTemplate]) -> Result<Option<MealTemplate>> {
    let input: String = Input::new()
        .with_prompt("Template name (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let candidates = find_templates(templates, input);
    if candidates.is_empty() {
        println!("No matching template found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let template = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Apply '{}'?", template.meal.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| template.clone()));
    }

    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|t| format!("{} ({})", t.meal.name, t.category))
        .collect();
    let shown = options.len();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < shown {
        Ok(Some(candidates[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Pick the next checklist action.
pub fn prompt_checklist_action() -> Result<ChecklistAction> {
    let options = [
        "Toggle an item",
        "Add an item",
        "Remove an item",
        "Save and quit",
        "Quit without saving",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => ChecklistAction::Toggle,
        1 => ChecklistAction::Add,
        2 => ChecklistAction::Remove,
        3 => ChecklistAction::SaveAndQuit,
        _ => ChecklistAction::Quit,
    })
}

/// Pick a checklist item by position.
pub fn prompt_item(checklist: &DailyChecklist) -> Result<usize> {
    let options: Vec<String> = checklist
        .items
        .iter()
        .map(|item| {
            let mark = if item.completed { "x" } else { " " };
            format!("[{}] {}", mark, item.text)
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Which item?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(selection)
}

/// Prompt for the text of a new checklist item.
pub fn prompt_item_text() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Item text")
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PlanError::InvalidInput("Item text is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
