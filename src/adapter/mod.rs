//! Production implementations of the catalog and store ports.

pub mod catalog;
pub mod store;

pub use catalog::HttpCatalog;
pub use store::JsonFileStore;
