use anyhow::Result;
use clap::{Parser, Subcommand};

use networth::cli::{
    handle_account_command, handle_allocation_command, handle_audit_command, handle_goal_command,
    handle_income_command, handle_project_command, handle_snapshot_command,
    handle_transaction_command, handle_windfall_command,
};
use networth::clock::SystemClock;
use networth::config::{paths::NetWorthPaths, settings::Settings};
use networth::logging::init_tracing;
use networth::projection::MAX_GOAL_YEARS;
use networth::storage::Storage;

#[derive(Parser)]
#[command(
    name = "networth",
    version,
    about = "Terminal net-worth tracker with year-by-year projections",
    long_about = "networth records accounts, paychecks and their budget allocations, \
                  windfalls and dated net-worth snapshots, then projects your net worth \
                  month by month for any calendar year."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(networth::cli::AccountCommands),

    /// Income source commands
    #[command(subcommand)]
    Income(networth::cli::IncomeCommands),

    /// Budget allocation commands
    #[command(subcommand, alias = "alloc")]
    Allocation(networth::cli::AllocationCommands),

    /// Windfall commands
    #[command(subcommand)]
    Windfall(networth::cli::WindfallCommands),

    /// Transaction ledger commands
    #[command(subcommand, alias = "transaction")]
    Txn(networth::cli::TransactionCommands),

    /// Net-worth snapshot commands
    #[command(subcommand)]
    Snapshot(networth::cli::SnapshotCommands),

    /// Projection commands
    #[command(subcommand)]
    Project(networth::cli::ProjectCommands),

    /// Estimate when projected net worth reaches a target
    Goal {
        /// Target net worth, e.g. 100000
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// Number of calendar years to search, starting with the current one
        #[arg(
            short,
            long,
            default_value = "5",
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_GOAL_YEARS))
        )]
        years: u32,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = NetWorthPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let clock = SystemClock;

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&storage, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, cmd)?,
        Some(Commands::Allocation(cmd)) => handle_allocation_command(&storage, cmd)?,
        Some(Commands::Windfall(cmd)) => handle_windfall_command(&storage, cmd)?,
        Some(Commands::Txn(cmd)) => handle_transaction_command(&storage, &clock, cmd)?,
        Some(Commands::Snapshot(cmd)) => handle_snapshot_command(&storage, &clock, cmd)?,
        Some(Commands::Project(cmd)) => {
            handle_project_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Goal { target, years }) => {
            handle_goal_command(&storage, &settings, &clock, &target, years)?;
        }
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Init) => {
            println!("Initializing networth at: {}", paths.data_dir().display());
            paths.ensure_directories()?;
            storage.save_all()?;
            settings.setup_completed = true;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  networth account add \"Checking\" -b 2500");
            println!("  networth income add \"Salary\" 4000 -f bi-weekly");
            println!("  networth allocation add \"Salary\" \"401k\" 10");
            println!("  networth project year");
        }
        Some(Commands::Config) => {
            println!("networth Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Rolling window days: {}", settings.rolling_window_days);
            println!("  Setup completed:     {}", settings.setup_completed);
            println!();
            println!(
                "Initialized: {}",
                if paths.is_initialized() { "yes" } else { "no (run 'networth init')" }
            );
        }
        None => {
            println!("networth - terminal net-worth tracker");
            println!();
            println!("Run 'networth --help' for usage information.");
            println!("Run 'networth init' to set up the data directory.");
        }
    }

    Ok(())
}
