//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] — Fake [`WishlistStore`](crate::port::WishlistStore)
//!   implementations: `MemoryStore` with scripted failures, and
//!   `GatedStore` for forcing read-modify-write interleavings.
//! - [`domain`] — Builders for products and categories.

pub mod domain;
pub mod store;
