use std::collections::HashSet;

use crate::error::{PlanError, Result};
use crate::models::{MealEntry, MealField, MealSlot, NutritionPlan};

/// Caller-supplied table of `(slot, field)` pairs that must not be edited.
///
/// Which pairs are locked is an editor-surface decision; the engine only
/// enforces whatever table it is handed.
#[derive(Debug, Clone, Default)]
pub struct EditPolicy {
    locked: HashSet<(MealSlot, MealField)>,
}

impl EditPolicy {
    /// Policy with no locked fields.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// The standard editor policy: the early-morning row always reads
    /// "Empty stomach", so its name field is locked.
    pub fn standard() -> Self {
        let mut policy = Self::default();
        policy.lock(MealSlot::EarlyMorning, MealField::Name);
        policy
    }

    pub fn lock(&mut self, slot: MealSlot, field: MealField) {
        self.locked.insert((slot, field));
    }

    pub fn is_locked(&self, slot: MealSlot, field: MealField) -> bool {
        self.locked.contains(&(slot, field))
    }
}

/// Replace a single field of a single meal, returning the updated plan.
///
/// The input plan is left untouched. Totals are not recomputed here, so a
/// caller can batch several edits before one recompute pass.
pub fn set_meal_field(
    plan: &NutritionPlan,
    slot: MealSlot,
    field: MealField,
    value: &str,
    policy: &EditPolicy,
) -> Result<NutritionPlan> {
    if policy.is_locked(slot, field) {
        return Err(PlanError::FieldLocked { slot, field });
    }

    let mut updated = plan.clone();
    updated.meals.entry_mut(slot).set(field, value);
    Ok(updated)
}

/// String-keyed variant of [`set_meal_field`] for callers working with
/// record field names. Unknown keys are caller bugs and fail with a typed
/// error rather than silently no-opping.
pub fn set_meal_field_by_key(
    plan: &NutritionPlan,
    slot: &str,
    field: &str,
    value: &str,
    policy: &EditPolicy,
) -> Result<NutritionPlan> {
    let slot: MealSlot = slot.parse()?;
    let field: MealField = field.parse()?;
    set_meal_field(plan, slot, field, value, policy)
}

/// Replace the whole meal at `slot` with a template's values.
///
/// Full-record replacement, not a per-field merge. The caller recomputes
/// totals afterward.
pub fn apply_template(plan: &NutritionPlan, slot: MealSlot, template: &MealEntry) -> NutritionPlan {
    let mut updated = plan.clone();
    *updated.meals.entry_mut(slot) = template.clone();
    updated
}
