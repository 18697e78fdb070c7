mod manager;
mod persistence;

pub use manager::PlanStateManager;
pub use persistence::{load_checklists, load_plans, save_checklists, save_plans};
