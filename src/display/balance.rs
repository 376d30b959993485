//! Balance display formatting

use crate::models::Balance;

/// Format a balance as a three-line summary
pub fn format_balance(balance: &Balance, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Income:  {:>14}\n",
        balance.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Outcome: {:>14}\n",
        balance.outcome.format_with_symbol(symbol)
    ));
    output.push_str(&"-".repeat(23));
    output.push('\n');
    output.push_str(&format!(
        "Total:   {:>14}\n",
        balance.total.format_with_symbol(symbol)
    ));

    output
}
