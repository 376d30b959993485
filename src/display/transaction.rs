//! Transaction display formatting
//!
//! Register and detail views. Category titles are looked up by the caller and
//! passed in, since transactions only carry the category ID.

use std::collections::HashMap;

use super::fit;
use crate::models::{CategoryId, Transaction};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, category: &str, symbol: &str) -> String {
    format!(
        "{:12}  {} {:7} {} {:>12}",
        txn.id.short(),
        fit(&txn.title, 24),
        txn.kind,
        fit(category, 16),
        txn.value.format_with_symbol(symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    categories: &HashMap<CategoryId, String>,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12}  {:24} {:7} {:16} {:>12}\n",
        "ID", "Title", "Type", "Category", "Value"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for txn in transactions {
        let category = categories
            .get(&txn.category_id)
            .map(String::as_str)
            .unwrap_or("(unknown)");
        output.push_str(&format_transaction_row(txn, category, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_name: Option<&str>,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Value:       {}\n",
        txn.value.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        category_name.unwrap_or("(unknown)")
    ));
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};

    fn coffee() -> Transaction {
        Transaction::new(
            "Coffee",
            TransactionType::Outcome,
            Money::from_cents(450),
            CategoryId::new(),
        )
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[], &HashMap::new(), "$");
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_register_resolves_category_titles() {
        let txn = coffee();
        let mut categories = HashMap::new();
        categories.insert(txn.category_id, "Food".to_string());

        let output = format_transaction_register(&[txn.clone()], &categories, "€");
        assert!(output.contains(&txn.id.short()));
        assert!(output.contains("Food"));
        assert!(output.contains("outcome"));
        assert!(output.contains("€4.50"));
    }

    #[test]
    fn test_register_unknown_category() {
        let output = format_transaction_register(&[coffee()], &HashMap::new(), "$");
        assert!(output.contains("(unknown)"));
    }

    #[test]
    fn test_details() {
        let txn = coffee();
        let output = format_transaction_details(&txn, Some("Food"), "$");

        assert!(output.contains(&txn.id.to_string()));
        assert!(output.contains("Category:    Food"));
        assert!(output.contains("$4.50"));
    }
}
