//! Catalog port for read-only product and category retrieval.

use std::future::Future;

use crate::domain::{Category, Product};
use crate::error::Result;

/// Read-only access to the remote product catalog.
///
/// Both fetches return the full list; filtering and pagination are
/// client-side transforms over the result. Failures surface as
/// [`CatalogError`](crate::error::CatalogError) and are not retried.
pub trait CatalogSource: Send + Sync {
    /// Fetch every product in the catalog.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Fetch every category in the catalog.
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send;
}
