use thiserror::Error;

use crate::models::{MealField, MealSlot};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown meal slot: {0}")]
    UnknownSlot(String),

    #[error("Unknown meal field: {0}")]
    UnknownField(String),

    #[error("Field is locked by policy: {slot}.{field}")]
    FieldLocked { slot: MealSlot, field: MealField },

    #[error("No plan found for trainee: {0}")]
    PlanNotFound(String),

    #[error("Unknown template category: {0}")]
    UnknownCategory(String),

    #[error("Checklist item index out of range: {0}")]
    ItemOutOfRange(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
