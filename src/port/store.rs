//! Store port for wishlist persistence.
//!
//! The wishlist is one named collection stored as a single blob: there
//! is no per-item addressability, so the port is deliberately just
//! whole-collection load and replace. Mutation semantics (dedup,
//! removal) live above this in the service layer.

use std::future::Future;
use std::sync::Arc;

use crate::domain::Product;
use crate::error::Result;

/// Storage operations for the wishlist collection.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `load` on an absent collection returns an empty sequence, not an
///   error; the collection is implicitly created on first read
/// - `save` replaces the stored blob in full
/// - There is no lock or compare-and-swap around a load/save pair; two
///   interleaved read-modify-write cycles can lose an update
pub trait WishlistStore: Send + Sync {
    /// Load the full collection. Absent storage yields an empty vec.
    fn load(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Replace the stored collection with `items` in full.
    fn save(&self, items: &[Product]) -> impl Future<Output = Result<()>> + Send;
}

impl<S: WishlistStore> WishlistStore for Arc<S> {
    async fn load(&self) -> Result<Vec<Product>> {
        S::load(self).await
    }

    async fn save(&self, items: &[Product]) -> Result<()> {
        S::save(self, items).await
    }
}
