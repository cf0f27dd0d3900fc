//! Trove - Product catalog browsing with a locally persisted wishlist.
//!
//! This crate fetches a product catalog over HTTP, filters and pages it
//! client-side, and keeps a user-curated wishlist on disk. The wishlist
//! is the stateful core: one named collection stored as a single JSON
//! blob, with deduplicated add and order-preserving remove implemented
//! as whole-blob read-modify-write cycles.
//!
//! # Architecture
//!
//! - [`domain`] - Product/category types and pure filter + pagination
//!   transforms
//! - [`port`] - Capability traits: [`port::CatalogSource`] (read-only
//!   remote fetch) and [`port::WishlistStore`] (whole-collection load
//!   and replace)
//! - [`adapter`] - Production implementations: reqwest HTTP client and
//!   JSON-file store
//! - [`service`] - [`service::WishlistService`]: dedup/remove semantics
//!   plus the storage-failure recovery policy
//! - [`config`] - TOML configuration with defaults and logging setup
//! - [`cli`] - clap command definitions and handlers
//! - [`error`] - Error types for the crate
//!
//! # Consistency model
//!
//! There is no change notification and no in-memory shared state:
//! every entry point re-reads storage to observe the current wishlist.
//! The load-mutate-save cycle is intentionally unlocked; see
//! [`service::WishlistService`] for the lost-update caveat.
//!
//! # Example
//!
//! ```no_run
//! use trove::adapter::JsonFileStore;
//! use trove::service::WishlistService;
//!
//! let store = JsonFileStore::new("/tmp/trove-data");
//! let wishlist = WishlistService::new(store);
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
