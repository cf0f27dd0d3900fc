use thiserror::Error;

use crate::domain::ProductId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Wishlist storage errors.
///
/// The store reports these honestly; whether they reach callers is
/// decided by the service layer's recovery policy.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read wishlist storage: {0}")]
    Read(#[source] std::io::Error),

    #[error("stored wishlist is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to serialize wishlist: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write wishlist storage: {0}")]
    Write(#[source] std::io::Error),
}

/// Remote catalog errors. Never retried or absorbed; these propagate
/// to the caller.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("product {id} not found in catalog")]
    ProductNotFound { id: ProductId },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, Error>;
