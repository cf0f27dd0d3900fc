//! HTTP catalog client.

use reqwest::Client;
use tracing::{debug, info};

use crate::domain::{Category, Product};
use crate::error::{CatalogError, Result};
use crate::port::CatalogSource;

/// Catalog client against a REST API exposing `/products` and
/// `/categories` as JSON arrays.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        info!(url = %url, "fetching products");

        let products: Vec<Product> = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(CatalogError::Request)?
            .json()
            .await
            .map_err(CatalogError::Request)?;

        debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let url = format!("{}/categories", self.base_url);
        info!(url = %url, "fetching categories");

        let categories: Vec<Category> = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(CatalogError::Request)?
            .json()
            .await
            .map_err(CatalogError::Request)?;

        debug!(count = categories.len(), "fetched categories");
        Ok(categories)
    }
}
