//! Transaction CLI commands

use std::collections::HashMap;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{format_balance, format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionType};
use crate::services::{BalanceService, CategoryService, CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Transaction type as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Outcome,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionType::Income,
            KindArg::Outcome => TransactionType::Outcome,
        }
    }
}

/// Arguments for `ledger add`
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Transaction title
    pub title: String,
    /// Amount (e.g. "20" or "19.99")
    pub value: String,
    /// Income or outcome
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: KindArg,
    /// Category title, created if it does not exist
    #[arg(short, long)]
    pub category: String,
}

/// Handle `ledger add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let value = Money::parse(&args.value).map_err(|e| LedgerError::Validation(e.to_string()))?;
    let category_title = args.category.trim().to_string();

    let txn = TransactionService::new(storage).create(CreateTransactionInput {
        title: args.title,
        value,
        kind: args.kind.into(),
        category_title: args.category,
    })?;

    println!("Created transaction:");
    print!(
        "{}",
        format_transaction_details(&txn, Some(&category_title), &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `ledger delete`
pub fn handle_delete_command(storage: &Storage, id: &str) -> LedgerResult<()> {
    let service = TransactionService::new(storage);

    let txn = service
        .find(id)?
        .ok_or_else(|| LedgerError::transaction_not_found(id))?;
    service.delete(txn.id)?;

    println!("Deleted transaction: {} ({})", txn.title, txn.id.short());
    Ok(())
}

/// Handle `ledger list`: the register followed by the balance
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let transactions = TransactionService::new(storage).list()?;
    let categories: HashMap<_, _> = CategoryService::new(storage)
        .list()?
        .into_iter()
        .map(|c| (c.id, c.title))
        .collect();
    let balance = BalanceService::new(storage).compute()?;

    print!(
        "{}",
        format_transaction_register(&transactions, &categories, &settings.currency_symbol)
    );
    println!();
    print!("{}", format_balance(&balance, &settings.currency_symbol));
    Ok(())
}

/// Handle `ledger balance`
pub fn handle_balance_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let balance = BalanceService::new(storage).compute()?;
    print!("{}", format_balance(&balance, &settings.currency_symbol));
    Ok(())
}
