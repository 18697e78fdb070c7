use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// One of the six fixed meal slots of a daily plan.
///
/// The set and order are fixed; string keys at the record boundary use the
/// persisted names (`earlyMorning`, `breakfast`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    #[serde(rename = "earlyMorning")]
    EarlyMorning,
    #[serde(rename = "breakfast")]
    Breakfast,
    #[serde(rename = "snack1")]
    Snack1,
    #[serde(rename = "lunch")]
    Lunch,
    #[serde(rename = "preWorkout")]
    PreWorkout,
    #[serde(rename = "dinner")]
    Dinner,
}

impl MealSlot {
    /// All slots in display order, top to bottom of the printed sheet.
    pub const ALL: [MealSlot; 6] = [
        MealSlot::EarlyMorning,
        MealSlot::Breakfast,
        MealSlot::Snack1,
        MealSlot::Lunch,
        MealSlot::PreWorkout,
        MealSlot::Dinner,
    ];

    /// Record key used in persisted plans.
    pub fn key(&self) -> &'static str {
        match self {
            MealSlot::EarlyMorning => "earlyMorning",
            MealSlot::Breakfast => "breakfast",
            MealSlot::Snack1 => "snack1",
            MealSlot::Lunch => "lunch",
            MealSlot::PreWorkout => "preWorkout",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::EarlyMorning => "Early Morning",
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Snack1 => "Snack 1",
            MealSlot::Lunch => "Lunch",
            MealSlot::PreWorkout => "Pre-workout",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// Short description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            MealSlot::EarlyMorning => "Empty stomach",
            MealSlot::Breakfast => "First meal of the day",
            MealSlot::Snack1 => "Mid-morning snack",
            MealSlot::Lunch => "Midday meal",
            MealSlot::PreWorkout => "Before exercise",
            MealSlot::Dinner => "Evening meal",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MealSlot {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| PlanError::UnknownSlot(s.to_string()))
    }
}

/// One of the six editable fields of a [`MealEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealField {
    Name,
    Quantity,
    Protein,
    Carbs,
    Fats,
    Calories,
}

impl MealField {
    /// All fields in record order.
    pub const ALL: [MealField; 6] = [
        MealField::Name,
        MealField::Quantity,
        MealField::Protein,
        MealField::Carbs,
        MealField::Fats,
        MealField::Calories,
    ];

    /// Record key used in persisted plans.
    pub fn key(&self) -> &'static str {
        match self {
            MealField::Name => "name",
            MealField::Quantity => "quantity",
            MealField::Protein => "protein",
            MealField::Carbs => "carbs",
            MealField::Fats => "fats",
            MealField::Calories => "calories",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MealField::Name => "Food Item",
            MealField::Quantity => "Quantity",
            MealField::Protein => "Protein (g)",
            MealField::Carbs => "Carbs (g)",
            MealField::Fats => "Fats (g)",
            MealField::Calories => "Calories",
        }
    }

    /// Whether editing this field affects the daily totals.
    pub fn is_nutrient(&self) -> bool {
        matches!(
            self,
            MealField::Protein | MealField::Carbs | MealField::Fats | MealField::Calories
        )
    }
}

impl fmt::Display for MealField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MealField {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| PlanError::UnknownField(s.to_string()))
    }
}

/// One meal row: free-text food description and quantity, plus four
/// nutrient fields kept as text so a half-typed value like "15g" or ""
/// never interrupts editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub name: String,
    pub quantity: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub calories: String,
}

impl MealEntry {
    pub fn new(
        name: &str,
        quantity: &str,
        protein: &str,
        carbs: &str,
        fats: &str,
        calories: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            protein: protein.to_string(),
            carbs: carbs.to_string(),
            fats: fats.to_string(),
            calories: calories.to_string(),
        }
    }

    pub fn get(&self, field: MealField) -> &str {
        match field {
            MealField::Name => &self.name,
            MealField::Quantity => &self.quantity,
            MealField::Protein => &self.protein,
            MealField::Carbs => &self.carbs,
            MealField::Fats => &self.fats,
            MealField::Calories => &self.calories,
        }
    }

    pub fn set(&mut self, field: MealField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MealField::Name => self.name = value,
            MealField::Quantity => self.quantity = value,
            MealField::Protein => self.protein = value,
            MealField::Carbs => self.carbs = value,
            MealField::Fats => self.fats = value,
            MealField::Calories => self.calories = value,
        }
    }
}
