use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::checklist::DailyChecklist;
use crate::error::Result;
use crate::models::NutritionPlan;

/// Load plans from a JSON file.
///
/// Deduplicates by lowercase trainee name (last occurrence wins).
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<NutritionPlan>> {
    let content = fs::read_to_string(path)?;
    let plans: Vec<NutritionPlan> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, NutritionPlan> = HashMap::new();
    for plan in plans {
        seen.insert(plan.key(), plan);
    }

    Ok(seen.into_values().collect())
}

/// Save plans to a JSON file.
///
/// Deduplicates by lowercase trainee name before saving.
pub fn save_plans<P: AsRef<Path>>(path: P, plans: &[NutritionPlan]) -> Result<()> {
    let mut seen: HashMap<String, &NutritionPlan> = HashMap::new();
    for plan in plans {
        seen.insert(plan.key(), plan);
    }

    let deduped: Vec<&NutritionPlan> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load daily checklists from a JSON file, deduplicated like plans.
pub fn load_checklists<P: AsRef<Path>>(path: P) -> Result<Vec<DailyChecklist>> {
    let content = fs::read_to_string(path)?;
    let checklists: Vec<DailyChecklist> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, DailyChecklist> = HashMap::new();
    for checklist in checklists {
        seen.insert(checklist.key(), checklist);
    }

    Ok(seen.into_values().collect())
}

/// Save daily checklists to a JSON file.
pub fn save_checklists<P: AsRef<Path>>(path: P, checklists: &[DailyChecklist]) -> Result<()> {
    let mut seen: HashMap<String, &DailyChecklist> = HashMap::new();
    for checklist in checklists {
        seen.insert(checklist.key(), checklist);
    }

    let deduped: Vec<&DailyChecklist> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::default_plan;
    use tempfile::NamedTempFile;

    #[test]
    fn test_plan_round_trip() {
        let mut plan = default_plan();
        plan.trainee_name = "Jane Roe".to_string();

        let file = NamedTempFile::new().unwrap();
        save_plans(file.path(), &[plan.clone()]).unwrap();

        let reloaded = load_plans(file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0], plan);
    }

    #[test]
    fn test_plan_deduplication_last_wins() {
        let mut first = default_plan();
        first.trainee_name = "Jane Roe".to_string();
        first.meals.lunch.protein = "10".to_string();

        let mut second = default_plan();
        second.trainee_name = "jane roe".to_string();
        second.meals.lunch.protein = "50".to_string();

        let file = NamedTempFile::new().unwrap();
        save_plans(file.path(), &[first, second]).unwrap();

        let reloaded = load_plans(file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].meals.lunch.protein, "50");
    }

    #[test]
    fn test_checklist_round_trip() {
        let mut checklist = crate::checklist::DailyChecklist::from_plan(&default_plan());
        checklist.toggle(0).unwrap();
        checklist.add_item("Evening walk");

        let file = NamedTempFile::new().unwrap();
        save_checklists(file.path(), &[checklist.clone()]).unwrap();

        let reloaded = load_checklists(file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0], checklist);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_plans("definitely/not/there.json").unwrap_err();
        assert!(matches!(err, crate::error::PlanError::Io(_)));
    }
}
