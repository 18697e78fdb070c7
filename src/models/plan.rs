use serde::{Deserialize, Serialize};

use crate::models::meal::{MealEntry, MealSlot};

/// Aggregate daily totals, text-formatted like the meal fields they are
/// derived from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanTotals {
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub calories: String,
}

/// The six-slot meal mapping.
///
/// Slots are struct fields rather than a map so the persisted record shape
/// stays fixed and a plan can never gain or lose a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meals {
    pub early_morning: MealEntry,
    pub breakfast: MealEntry,
    pub snack1: MealEntry,
    pub lunch: MealEntry,
    pub pre_workout: MealEntry,
    pub dinner: MealEntry,
}

impl Meals {
    pub fn entry(&self, slot: MealSlot) -> &MealEntry {
        match slot {
            MealSlot::EarlyMorning => &self.early_morning,
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Snack1 => &self.snack1,
            MealSlot::Lunch => &self.lunch,
            MealSlot::PreWorkout => &self.pre_workout,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn entry_mut(&mut self, slot: MealSlot) -> &mut MealEntry {
        match slot {
            MealSlot::EarlyMorning => &mut self.early_morning,
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Snack1 => &mut self.snack1,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::PreWorkout => &mut self.pre_workout,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealEntry)> {
        MealSlot::ALL.iter().map(move |&slot| (slot, self.entry(slot)))
    }
}

/// A trainee's full nutrition plan: identity, six meals, and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    pub trainee_name: String,
    pub meals: Meals,
    pub totals: PlanTotals,
}

impl NutritionPlan {
    /// Canonical key for store lookups (lowercase trainee name).
    pub fn key(&self) -> String {
        self.trainee_name.to_lowercase()
    }
}
