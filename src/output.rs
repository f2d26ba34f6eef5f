//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::Product;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Product {
    fn pretty_print(&self) -> String {
        let header = format!("Product #{}", self.id);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider, format!("Title:          {}", self.title)];

        if !self.description.is_empty() {
            lines.push(format!("Description:    {}", self.description));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_pretty_print_format() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "iPhone 9",
            "description": "An apple mobile which is nothing like apple"
        }))
        .unwrap();

        let output = product.pretty_print();
        assert!(output.starts_with("Product #1"));
        assert!(output.contains("Title:          iPhone 9"));
        assert!(output.contains("Description:"));
    }

    #[test]
    fn test_product_pretty_print_skips_empty_description() {
        let product = Product {
            id: 2,
            title: "Lamp".to_string(),
            description: String::new(),
        };

        assert!(!product.pretty_print().contains("Description:"));
    }
}
