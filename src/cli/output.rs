//! Shared CLI output helpers for consistent user-facing text.

use std::collections::HashSet;
use std::fmt::Display;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::domain::{Category, Product, ProductId};

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Print a single-line note.
pub fn note(message: impl Display) {
    println!("{message}");
}

/// Render products as a table. When `saved` is given, an extra column
/// marks products already in the wishlist.
pub fn product_table(products: &[Product], saved: Option<&HashSet<ProductId>>) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["ID", "Title", "Price", "Category"];
    if saved.is_some() {
        header.push("Saved");
    }
    builder.push_record(header);

    for product in products {
        let mut row = vec![
            product.id.to_string(),
            product.title.clone(),
            format!("${}", product.price),
            product.category.name.clone(),
        ];
        if let Some(saved) = saved {
            row.push(if saved.contains(&product.id) { "★" } else { "" }.to_string());
        }
        builder.push_record(row);
    }

    builder.build().with(Style::sharp()).to_string()
}

/// Render categories as a table.
pub fn category_table(categories: &[Category]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name"]);
    for category in categories {
        builder.push_record([category.id.to_string(), category.name.clone()]);
    }
    builder.build().with(Style::sharp()).to_string()
}
