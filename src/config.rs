//! Configuration loading from TOML files.
//!
//! Every section has defaults, so the binary runs without a config
//! file at all; `trove.toml` in the working directory is picked up
//! when present.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::DEFAULT_PER_PAGE;
use crate::error::{ConfigError, Result};
use crate::service::RecoveryPolicy;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "trove.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub wishlist: WishlistConfig,
    pub logging: LoggingConfig,
}

/// Remote catalog endpoint.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.escuelajs.co/api/v1".into(),
        }
    }
}

/// Wishlist storage location.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the wishlist blob. Defaults to the platform
    /// data directory under `trove/`.
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the effective data directory.
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("trove")
        })
    }
}

/// Wishlist behavior.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WishlistConfig {
    /// Surface storage errors instead of logging and recovering.
    pub strict: bool,
    /// Browse page size.
    pub per_page: usize,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            strict: false,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl WishlistConfig {
    /// Recovery policy implied by `strict`.
    #[must_use]
    pub fn policy(&self) -> RecoveryPolicy {
        if self.strict {
            RecoveryPolicy::Surface
        } else {
            RecoveryPolicy::Swallow
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from [`DEFAULT_CONFIG_FILE`] if
    /// it exists, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.catalog.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.wishlist.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "per_page",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging per the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
