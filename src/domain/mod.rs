//! Catalog domain types and pure transforms.

mod filter;
mod product;

pub use filter::{CatalogPage, CatalogQuery, DEFAULT_PER_PAGE};
pub use product::{Category, Product, ProductId};
