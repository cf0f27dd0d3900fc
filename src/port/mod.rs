//! Trait definitions for the crate's external collaborators.
//!
//! Consumers depend on these capabilities rather than on a concrete
//! HTTP client or storage medium, so tests can inject fakes.

pub mod catalog;
pub mod store;

pub use catalog::CatalogSource;
pub use store::WishlistStore;
