//! CLI command handler for CSV import

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Arguments for `ledger import`
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file with a header line and columns title,type,value,category
    pub file: PathBuf,
    /// Keep the file after a successful import
    #[arg(long)]
    pub keep: bool,
}

/// Handle `ledger import`
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    args: ImportArgs,
) -> LedgerResult<()> {
    let keep = args.keep || !settings.delete_imported_files;

    let imported = ImportService::new(storage)
        .keep_source(keep)
        .import(&args.file)?;

    println!(
        "Imported {} transaction(s) from {}",
        imported.len(),
        args.file.display()
    );
    if !keep {
        println!("Removed {}", args.file.display());
    }
    Ok(())
}
