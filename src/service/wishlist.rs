//! Wishlist service: identity-deduplicated mutations over the stored
//! collection.
//!
//! Every operation is a read-modify-write cycle over the whole blob:
//! load, apply a pure transform to the in-memory sequence, save. There
//! is no lock around the cycle, so two callers that both load before
//! either saves will lose one update. Callers that need a consistent
//! view simply re-load after mutating; there is no change notification.

use tracing::{debug, warn};

use crate::domain::{Product, ProductId};
use crate::error::{Error, Result};
use crate::port::WishlistStore;

/// What the service does with a storage failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Log the failure and carry on: a failed load reads as an empty
    /// collection, a failed save reports success. Matches the storage
    /// medium rarely failing on the target platform; the cost is
    /// silent data loss when it does.
    #[default]
    Swallow,
    /// Propagate storage errors to the caller.
    Surface,
}

/// Wishlist operations over an injected store.
pub struct WishlistService<S> {
    store: S,
    policy: RecoveryPolicy,
}

impl<S: WishlistStore> WishlistService<S> {
    /// Create a service with the default [`RecoveryPolicy::Swallow`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: RecoveryPolicy::default(),
        }
    }

    /// Set the recovery policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RecoveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load the full wishlist.
    ///
    /// Under `Swallow`, an unreadable or corrupt blob is logged and
    /// reads as empty.
    pub async fn load(&self) -> Result<Vec<Product>> {
        match self.store.load().await {
            Ok(items) => Ok(items),
            Err(e) => self.recover_load(e),
        }
    }

    /// Add `product` unless an entry with the same id already exists.
    ///
    /// The duplicate case is a silent no-op: the stored record keeps
    /// its original fields even when the incoming one differs, and no
    /// save is performed.
    pub async fn add(&self, product: Product) -> Result<()> {
        let mut items = self.load().await?;
        if items.iter().any(|p| p.id == product.id) {
            debug!(id = %product.id, title = %product.title, "product already in wishlist");
            return Ok(());
        }
        debug!(id = %product.id, title = %product.title, "adding product to wishlist");
        items.push(product);
        self.persist(&items).await
    }

    /// Remove every entry with the given id, preserving the relative
    /// order of the rest.
    ///
    /// Removing an id that is not present is a no-op that still
    /// rewrites the blob.
    pub async fn remove(&self, id: ProductId) -> Result<()> {
        let mut items = self.load().await?;
        items.retain(|p| p.id != id);
        debug!(id = %id, remaining = items.len(), "removing product from wishlist");
        self.persist(&items).await
    }

    async fn persist(&self, items: &[Product]) -> Result<()> {
        match self.store.save(items).await {
            Ok(()) => Ok(()),
            Err(e) if self.policy == RecoveryPolicy::Swallow => {
                warn!(error = %e, "wishlist save failed, change lost");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn recover_load(&self, e: Error) -> Result<Vec<Product>> {
        match self.policy {
            RecoveryPolicy::Swallow => {
                warn!(error = %e, "wishlist load failed, treating as empty");
                Ok(Vec::new())
            }
            RecoveryPolicy::Surface => Err(e),
        }
    }
}
