//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_date_or_today};
use crate::analytics::{FilterSpec, ALL};
use crate::config::settings::Settings;
use crate::display::{format_category_list, format_transaction_details, format_transaction_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::TransactionType;
use crate::services::{CreateTransactionInput, TransactionService, UpdateTransactionInput};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// income or expense
        kind: String,
        /// Amount (e.g., "45.50")
        amount: String,
        /// Category (e.g., Food, Salary, or any custom name)
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long)]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Match description or category (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact category, or "all"
        #[arg(short, long, default_value = ALL)]
        category: String,
        /// income, expense, or "all"
        #[arg(short = 't', long = "type", default_value = ALL)]
        kind: String,
        /// Month (YYYY-MM)
        #[arg(short, long, default_value = "")]
        month: String,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List the built-in categories
    Categories,
}

fn parse_kind(value: &str) -> TrackerResult<TransactionType> {
    value
        .parse::<TransactionType>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(storage);
    let currency = settings.currency;

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let input = CreateTransactionInput {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                category,
                description,
                date: parse_date_or_today(date.as_deref())?,
            };

            let txn = service.create(input)?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date);
            println!("  Type:     {}", txn.kind);
            println!("  Amount:   {}", currency.format(txn.amount));
            println!("  Category: {}", txn.category);
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            month,
            limit,
        } => {
            let filter = FilterSpec::from_raw(&search, &category, &kind, &month)?;
            let mut transactions = service.list(&filter)?;
            let matched = transactions.len();

            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_table(&transactions, currency));
            if transactions.len() < matched {
                println!("\nShowing {} of {} transactions", transactions.len(), matched);
            } else {
                println!("\nShowing {} transactions", matched);
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(&id)?;
            print!("{}", format_transaction_details(&txn, currency));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let input = UpdateTransactionInput {
                kind: kind.as_deref().map(parse_kind).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            if input.is_empty() {
                println!("Nothing to change. Pass at least one of --type, --amount, --category, --description or --date.");
                return Ok(());
            }

            let updated = service.update(&id, input)?;

            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", updated.date);
            println!("  Type:     {}", updated.kind);
            println!("  Amount:   {}", currency.format(updated.amount));
            println!("  Category: {}", updated.category);
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.get(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:        {}", txn.date);
                println!("  Amount:      {}", currency.format(txn.amount));
                println!("  Description: {}", txn.description);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id, deleted.date, deleted.description
            );
        }

        TransactionCommands::Categories => {
            print!("{}", format_category_list());
        }
    }

    Ok(())
}
