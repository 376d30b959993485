//! Category display formatting

use crate::models::Category;

/// Format categories as a simple list
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:12}  {}\n", "ID", "Title"));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for category in categories {
        output.push_str(&format!("{:12}  {}\n", category.id.short(), category.title));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_list(&[]), "No categories found.\n");
    }

    #[test]
    fn test_list_shows_titles() {
        let food = Category::new("Food");
        let output = format_category_list(&[food.clone()]);

        assert!(output.contains("Food"));
        assert!(output.contains(&food.id.short()));
    }
}
