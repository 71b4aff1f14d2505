use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_audit_command, handle_config_command, handle_export_command, handle_goal_command,
    handle_report_command, handle_transaction_command, ConfigCommands, ExportCommands,
    GoalCommands, ReportCommands, TransactionCommands,
};
use fintrack::config::{paths::TrackerPaths, settings::Settings};
use fintrack::storage::{init::{initialize_storage, needs_initialization}, Storage};

/// Environment variable holding a tracing filter (e.g. `fintrack=debug`)
const LOG_ENV: &str = "FINTRACK_LOG";

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal income, expense and savings-goal tracker",
    long_about = "fintrack records income and expenses, summarizes them by month \
                  with month-over-month changes, and tracks progress toward \
                  savings goals from the command line."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and empty record files
    Init,

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Show recent entries from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Monthly reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            if storage.is_initialized() && !needs_initialization(&paths) {
                println!("fintrack is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Currency: {} (change with 'fintrack config set-currency <CODE>')", settings.currency);
            println!("Run 'fintrack transaction add --help' to record your first transaction.");
        }
        Some(Commands::Config { command }) => {
            handle_config_command(&paths, &mut settings, command)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        None => {
            println!("fintrack - income, expense and savings-goal tracking");
            println!();
            if !storage.is_initialized() {
                println!("Run 'fintrack init' to set up your data directory.");
            }
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report dashboard' for this month's overview.");
        }
    }

    Ok(())
}
