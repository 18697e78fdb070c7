use clap::Parser;
use std::path::Path;

use diet_plan_builder_rs::checklist::DailyChecklist;
use diet_plan_builder_rs::cli::{Cli, Command};
use diet_plan_builder_rs::error::Result;
use diet_plan_builder_rs::export::{export_filename, render_plan_document, write_plan_csv};
use diet_plan_builder_rs::interface::{
    display_checklist, display_plan, display_templates, display_totals_overview,
    prompt_checklist_action, prompt_edit_action, prompt_field, prompt_field_value, prompt_item,
    prompt_item_text, prompt_slot, prompt_target_slot, prompt_template, prompt_trainee_name,
    prompt_yes_no, ChecklistAction, EditAction,
};
use diet_plan_builder_rs::nutrition::{
    apply_template, default_plan, set_meal_field, with_recomputed_totals, EditPolicy,
};
use diet_plan_builder_rs::state::{
    load_checklists, load_plans, save_checklists, save_plans, PlanStateManager,
};
use diet_plan_builder_rs::templates::{built_in_templates, load_templates_csv};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Edit { trainee } => cmd_edit(&cli.file, trainee),
        Command::Templates { import } => cmd_templates(import.as_deref()),
        Command::Checklist { trainee } => cmd_checklist(&cli.file, &cli.checklist_file, &trainee),
        Command::Reset { trainee } => cmd_reset(&cli.file, &trainee),
        Command::Export {
            trainee,
            output,
            csv,
        } => cmd_export(&cli.file, &trainee, output.as_deref(), csv),
    }
}

/// Load the plan store, starting empty when the file does not exist yet.
fn load_manager(file_path: &str) -> Result<PlanStateManager> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Ok(PlanStateManager::new(Vec::new()));
    }
    Ok(PlanStateManager::new(load_plans(path)?))
}

/// Edit a trainee's plan interactively.
fn cmd_edit(file_path: &str, trainee: Option<String>) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    let trainee = match trainee {
        Some(name) => name,
        None => prompt_trainee_name()?,
    };

    let mut plan = match manager.get_plan(&trainee) {
        Some(existing) => existing.clone(),
        None => {
            println!("No stored plan for {}; starting from the default.", trainee);
            let mut fresh = default_plan();
            fresh.trainee_name = trainee.clone();
            fresh
        }
    };

    let policy = EditPolicy::standard();

    loop {
        display_plan(&plan);

        match prompt_edit_action()? {
            EditAction::EditField => {
                let slot = prompt_slot()?;
                let field = prompt_field()?;

                if policy.is_locked(slot, field) {
                    println!(
                        "{} {} is fixed and cannot be edited.",
                        slot.label(),
                        field.label()
                    );
                    continue;
                }

                let current = plan.meals.entry(slot).get(field).to_string();
                let value = prompt_field_value(field, &current)?;
                plan = set_meal_field(&plan, slot, field, &value, &policy)?;

                if field.is_nutrient() {
                    plan = with_recomputed_totals(&plan);
                }
            }
            EditAction::ApplyTemplate => {
                let templates = built_in_templates();
                if let Some(template) = prompt_template(&templates)? {
                    let slot = prompt_target_slot(template.category.target_slot())?;
                    plan = apply_template(&plan, slot, &template.meal);
                    plan = with_recomputed_totals(&plan);
                    println!("Applied '{}' to {}.", template.meal.name, slot.label());
                }
            }
            EditAction::Overview => {
                plan = with_recomputed_totals(&plan);
                display_totals_overview(&plan);
            }
            EditAction::Reset => {
                if prompt_yes_no("Reset to the default plan?", false)? {
                    let name = plan.trainee_name.clone();
                    plan = default_plan();
                    plan.trainee_name = name;
                }
            }
            EditAction::SaveAndQuit => {
                plan = with_recomputed_totals(&plan);
                manager.upsert(plan);
                save_plans(file_path, &manager.to_plans())?;
                println!("Plan saved.");
                break;
            }
            EditAction::Quit => break,
        }
    }

    Ok(())
}

/// List the template catalog, optionally extended from a CSV file.
fn cmd_templates(import: Option<&str>) -> Result<()> {
    let mut templates = built_in_templates();

    if let Some(path) = import {
        let imported = load_templates_csv(path)?;
        println!("Imported {} templates from {}", imported.len(), path);
        templates.extend(imported);
    }

    display_templates(&templates);
    Ok(())
}

/// Work through a trainee's daily checklist.
fn cmd_checklist(file_path: &str, checklist_path: &str, trainee: &str) -> Result<()> {
    let manager = load_manager(file_path)?;

    let mut checklists = if Path::new(checklist_path).exists() {
        load_checklists(checklist_path)?
    } else {
        Vec::new()
    };

    let key = trainee.to_lowercase();
    let mut checklist = match checklists.iter().find(|c| c.key() == key) {
        Some(existing) => existing.clone(),
        None => {
            let plan = match manager.get_plan(trainee) {
                Some(plan) => plan.clone(),
                None => {
                    eprintln!("No plan found for trainee: {}", trainee);
                    eprintln!("Create one first with 'edit --trainee \"{}\"'.", trainee);
                    return Ok(());
                }
            };
            println!("Generating today's checklist from the diet plan.");
            DailyChecklist::from_plan(&plan)
        }
    };

    loop {
        display_checklist(&checklist);

        match prompt_checklist_action()? {
            ChecklistAction::Toggle => {
                let index = prompt_item(&checklist)?;
                checklist.toggle(index)?;
            }
            ChecklistAction::Add => {
                let text = prompt_item_text()?;
                checklist.add_item(text);
            }
            ChecklistAction::Remove => {
                let index = prompt_item(&checklist)?;
                let removed = checklist.remove_item(index)?;
                println!("Removed: {}", removed.text);
            }
            ChecklistAction::SaveAndQuit => {
                checklists.retain(|c| c.key() != key);
                checklists.push(checklist);
                save_checklists(checklist_path, &checklists)?;
                println!("Checklist saved.");
                break;
            }
            ChecklistAction::Quit => break,
        }
    }

    Ok(())
}

/// Replace a trainee's stored plan with the built-in default.
fn cmd_reset(file_path: &str, trainee: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    let mut plan = default_plan();
    plan.trainee_name = trainee.to_string();
    manager.upsert(plan);

    save_plans(file_path, &manager.to_plans())?;
    println!("Reset {}'s plan to the default.", trainee);
    Ok(())
}

/// Export a trainee's plan as a printable text sheet or a CSV table.
fn cmd_export(file_path: &str, trainee: &str, output: Option<&str>, csv: bool) -> Result<()> {
    let manager = load_manager(file_path)?;

    let plan = match manager.get_plan(trainee) {
        Some(plan) => plan.clone(),
        None => {
            eprintln!("No plan found for trainee: {}", trainee);
            return Ok(());
        }
    };

    if csv {
        let path = output
            .map(str::to_string)
            .unwrap_or_else(|| export_filename(trainee, "csv"));
        write_plan_csv(&path, &plan)?;
        println!("Wrote {}", path);
        return Ok(());
    }

    let document = render_plan_document(&plan);
    match output {
        Some(path) => {
            std::fs::write(path, document)?;
            println!("Wrote {}", path);
        }
        None => print!("{}", document),
    }

    Ok(())
}
