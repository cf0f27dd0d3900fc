//! Builders for domain fixtures.

use rust_decimal::Decimal;

use crate::domain::{Category, Product, ProductId};

/// A category fixture with a derived name.
pub fn category(id: u64) -> Category {
    Category {
        id,
        name: format!("Category {id}"),
        image: None,
    }
}

/// A product fixture in category 1.
pub fn product(id: u64, title: &str) -> Product {
    product_in_category(id, title, 1)
}

/// A product fixture with an explicit category.
pub fn product_in_category(id: u64, title: &str, category_id: u64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Decimal::new(1999, 2),
        description: format!("Description of {title}"),
        images: vec![format!("https://img.example/{id}.png")],
        category: category(category_id),
    }
}
