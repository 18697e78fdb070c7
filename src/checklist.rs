use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::{MealSlot, NutritionPlan};

/// Standing items appended to every generated checklist.
const STANDING_ITEMS: [&str; 2] = [
    "Take daily vitamins and supplements",
    "Drink 8 glasses of water throughout the day",
];

/// One checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub completed: bool,
    /// Set for items generated from a plan's meal rows; custom and
    /// standing items carry no slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_slot: Option<MealSlot>,
}

impl ChecklistItem {
    fn custom(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            meal_slot: None,
        }
    }
}

/// A trainee's daily compliance checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChecklist {
    pub trainee_name: String,
    pub items: Vec<ChecklistItem>,
}

impl DailyChecklist {
    /// Build a checklist from a plan: one item per meal row, in slot
    /// order, plus the standing supplement and hydration items.
    pub fn from_plan(plan: &NutritionPlan) -> Self {
        let mut items: Vec<ChecklistItem> = plan
            .meals
            .iter()
            .map(|(slot, entry)| ChecklistItem {
                text: format!("{}: {} ({})", slot.label(), entry.name, entry.quantity),
                completed: false,
                meal_slot: Some(slot),
            })
            .collect();

        for text in STANDING_ITEMS {
            items.push(ChecklistItem::custom(text));
        }

        Self {
            trainee_name: plan.trainee_name.clone(),
            items,
        }
    }

    /// Canonical key for store lookups (lowercase trainee name).
    pub fn key(&self) -> String {
        self.trainee_name.to_lowercase()
    }

    /// Flip one item's completion state.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(PlanError::ItemOutOfRange(index))?;
        item.completed = !item.completed;
        Ok(())
    }

    /// Append a trainer-authored item.
    pub fn add_item(&mut self, text: impl Into<String>) {
        self.items.push(ChecklistItem::custom(text));
    }

    /// Remove an item, returning it.
    pub fn remove_item(&mut self, index: usize) -> Result<ChecklistItem> {
        if index >= self.items.len() {
            return Err(PlanError::ItemOutOfRange(index));
        }
        Ok(self.items.remove(index))
    }

    /// (completed, total) counts.
    pub fn completion(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|i| i.completed).count();
        (done, self.items.len())
    }

    /// Completed share in percent; 0 for an empty list.
    pub fn compliance_percent(&self) -> f64 {
        let (done, total) = self.completion();
        if total == 0 {
            0.0
        } else {
            done as f64 / total as f64 * 100.0
        }
    }
}
