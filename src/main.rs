use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger::cli::{
    handle_add_command, handle_balance_command, handle_categories_command,
    handle_delete_command, handle_history_command, handle_import_command, handle_list_command,
    AddArgs, ImportArgs,
};
use ledger::config::{paths::LedgerPaths, settings::Settings};
use ledger::storage::Storage;

/// Environment variable holding the tracing filter (e.g. `debug`, `ledger=trace`)
const LOG_ENV: &str = "LEDGER_LOG";

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger with balance-checked outcomes and CSV import",
    long_about = "ledger records income and outcome transactions tagged with \
                  categories. Outcomes larger than the current balance are \
                  refused, and transactions can be imported in bulk from CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a transaction
    Add(AddArgs),

    /// Delete a transaction by ID or ID prefix
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID, as shown by `ledger list`
        id: String,
    },

    /// Import transactions from a CSV file
    Import(ImportArgs),

    /// List all transactions followed by the balance
    #[command(alias = "ls")]
    List,

    /// Show income, outcome and total
    Balance,

    /// List categories
    Categories,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths)?.with_serialized_writes(settings.serialize_writes);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::Delete { id }) => handle_delete_command(&storage, &id)?,
        Some(Commands::Import(args)) => handle_import_command(&storage, &settings, args)?,
        Some(Commands::List) => handle_list_command(&storage, &settings)?,
        Some(Commands::Balance) => handle_balance_command(&storage, &settings)?,
        Some(Commands::Categories) => handle_categories_command(&storage)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Config) => {
            let paths = storage.paths();
            if !paths.settings_file().exists() {
                settings.save(paths)?;
            }
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Serialize writes:      {}", settings.serialize_writes);
            println!("  Delete imported files: {}", settings.delete_imported_files);
        }
        None => {
            println!("ledger - personal finance ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
