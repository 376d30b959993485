//! Category CLI commands

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Handle `ledger categories`
pub fn handle_categories_command(storage: &Storage) -> LedgerResult<()> {
    let categories = CategoryService::new(storage).list()?;
    print!("{}", format_category_list(&categories));
    Ok(())
}
