//! JSON-file wishlist store.
//!
//! The whole collection is serialized as one JSON array in a single
//! file named [`WISHLIST_KEY`]. Every mutation upstream rewrites the
//! blob in full; this must stay a whole-blob store and never grow
//! per-item addressing, because the service layer assumes full-replace
//! semantics.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Product;
use crate::error::{Result, StorageError};
use crate::port::WishlistStore;

/// Fixed storage key: the filename holding the serialized wishlist.
pub const WISHLIST_KEY: &str = "user_wishlist.json";

/// File-backed store writing the collection under [`WISHLIST_KEY`]
/// inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`. The directory is created
    /// on first save, not here.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(WISHLIST_KEY),
        }
    }

    /// Full path of the blob file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WishlistStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Product>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no wishlist file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::Read(e).into()),
        };

        let items: Vec<Product> =
            serde_json::from_slice(&bytes).map_err(StorageError::Corrupt)?;
        debug!(count = items.len(), "wishlist loaded");
        Ok(items)
    }

    async fn save(&self, items: &[Product]) -> Result<()> {
        let blob = serde_json::to_vec(items).map_err(StorageError::Serialize)?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(StorageError::Write)?;
        }
        tokio::fs::write(&self.path, blob)
            .await
            .map_err(StorageError::Write)?;

        debug!(count = items.len(), "wishlist saved");
        Ok(())
    }
}
