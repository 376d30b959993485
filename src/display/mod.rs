//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for transactions, categories and the
//! balance. Amounts are printed with the configured currency symbol.

pub mod balance;
pub mod category;
pub mod transaction;

pub use balance::format_balance;
pub use category::format_category_list;
pub use transaction::{format_transaction_details, format_transaction_register};

/// Pad or cut a string to exactly `width` characters
pub(crate) fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Food", 6), "Food  ");
        assert_eq!(fit("Groceries and more", 10), "Groceri...");
        assert_eq!(fit("Café au lait", 8), "Café ...");
    }
}
