//! Goal CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date_or_today, parse_month};
use crate::config::settings::Settings;
use crate::display::format_goal_list;
use crate::error::TrackerResult;
use crate::services::{CreateGoalInput, GoalService};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal title
        title: String,
        /// Amount to save
        amount: String,
        /// Target month (YYYY-MM)
        target_month: String,
    },
    /// List goals with progress against all-time savings
    List {
        /// Judge deadlines as of this date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Edit a goal
    Edit {
        /// Goal ID or title
        goal: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New target month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a goal
    Delete {
        /// Goal ID or title
        goal: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> TrackerResult<()> {
    let service = GoalService::new(storage);
    let currency = settings.currency;

    match cmd {
        GoalCommands::Add {
            title,
            amount,
            target_month,
        } => {
            let goal = service.create(CreateGoalInput {
                title,
                goal_amount: parse_amount(&amount)?,
                target_month: parse_month(&target_month)?,
            })?;

            println!("Created goal: {}", goal.title);
            println!("  ID:     {}", goal.id);
            println!("  Amount: {}", currency.format(goal.goal_amount));
            println!("  Target: {}", goal.target_month);
        }

        GoalCommands::List { as_of } => {
            let today = parse_date_or_today(as_of.as_deref())?;
            let goals = service.progress(today)?;
            print!("{}", format_goal_list(&goals, currency));
        }

        GoalCommands::Edit {
            goal,
            title,
            amount,
            month,
        } => {
            let amount = amount.as_deref().map(parse_amount).transpose()?;
            let month = month.as_deref().map(parse_month).transpose()?;

            if title.is_none() && amount.is_none() && month.is_none() {
                println!("Nothing to change. Pass at least one of --title, --amount or --month.");
                return Ok(());
            }

            let updated = service.update(&goal, title, amount, month)?;
            println!("Updated goal: {}", updated.title);
            println!("  Amount: {}", currency.format(updated.goal_amount));
            println!("  Target: {}", updated.target_month);
        }

        GoalCommands::Delete { goal, force } => {
            let found = service.get(&goal)?;

            if !force {
                println!(
                    "About to delete goal '{}' ({} by {})",
                    found.title,
                    currency.format(found.goal_amount),
                    found.target_month
                );
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&found.id.to_string())?;
            println!("Deleted goal: {}", deleted.title);
        }
    }

    Ok(())
}
