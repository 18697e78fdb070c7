use clap::{Parser, Subcommand};

/// DietPlanBuilder — author trainee nutrition plans with live totals,
/// meal templates, and daily checklists.
#[derive(Parser, Debug)]
#[command(name = "diet_plan_builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the plan store JSON file.
    #[arg(short, long, default_value = "diet_plans.json")]
    pub file: String,

    /// Path to the checklist store JSON file.
    #[arg(long, default_value = "daily_checklists.json")]
    pub checklist_file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit a trainee's diet plan interactively.
    Edit {
        /// Trainee name; prompted for when omitted.
        #[arg(short, long)]
        trainee: Option<String>,
    },

    /// Browse the quick meal template catalog.
    Templates {
        /// Also load templates from a CSV file
        /// (category,name,quantity,protein,carbs,fats,calories).
        #[arg(long)]
        import: Option<String>,
    },

    /// Work through a trainee's daily compliance checklist.
    Checklist {
        #[arg(short, long)]
        trainee: String,
    },

    /// Replace a trainee's plan with the built-in default.
    Reset {
        #[arg(short, long)]
        trainee: String,
    },

    /// Export a trainee's plan as a printable document.
    Export {
        #[arg(short, long)]
        trainee: String,

        /// Output file; defaults to stdout for text, or a
        /// diet-plan-<trainee>.csv file for CSV.
        #[arg(short, long)]
        output: Option<String>,

        /// Write the meal table as CSV instead of the text sheet.
        #[arg(long)]
        csv: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Edit { trainee: None }
    }
}
