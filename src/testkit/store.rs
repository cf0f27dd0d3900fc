//! Fake wishlist stores for tests.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::sync::Barrier;

use crate::domain::Product;
use crate::error::{Result, StorageError};
use crate::port::WishlistStore;

/// In-memory store holding the blob as an optional vec.
///
/// `None` models an absent storage key (nothing ever saved); loads
/// then yield an empty collection. Failures can be scripted per
/// direction to exercise the service's recovery policy.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Option<Vec<Product>>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the stored blob.
    pub fn seed(&self, items: Vec<Product>) {
        *self.items.write() = Some(items);
    }

    /// Make every subsequent `load` fail.
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `save` fail.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The stored blob, `None` if nothing was ever saved.
    pub fn snapshot(&self) -> Option<Vec<Product>> {
        self.items.read().clone()
    }
}

impl WishlistStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Product>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Read(io::Error::other("scripted load failure")).into());
        }
        Ok(self.items.read().clone().unwrap_or_default())
    }

    async fn save(&self, items: &[Product]) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Write(io::Error::other("scripted save failure")).into());
        }
        *self.items.write() = Some(items.to_vec());
        Ok(())
    }
}

/// Store whose `save` blocks on a barrier until `parties` savers have
/// arrived.
///
/// Forces the classic lost-update interleaving: with two parties, both
/// callers complete their `load` before either `save` proceeds, so the
/// later save clobbers the earlier one.
#[derive(Debug)]
pub struct GatedStore {
    inner: MemoryStore,
    save_gate: Barrier,
}

impl GatedStore {
    /// Create a store gating saves on `parties` concurrent callers.
    pub fn new(parties: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            save_gate: Barrier::new(parties),
        }
    }

    /// The stored blob, `None` if nothing was ever saved.
    pub fn snapshot(&self) -> Option<Vec<Product>> {
        self.inner.snapshot()
    }
}

impl WishlistStore for GatedStore {
    async fn load(&self) -> Result<Vec<Product>> {
        self.inner.load().await
    }

    async fn save(&self, items: &[Product]) -> Result<()> {
        self.save_gate.wait().await;
        self.inner.save(items).await
    }
}
