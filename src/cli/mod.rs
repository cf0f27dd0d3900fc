//! Command-line interface definitions.

pub mod browse;
pub mod categories;
pub mod output;
pub mod wishlist;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::adapter::{HttpCatalog, JsonFileStore};
use crate::config::Config;
use crate::error::Result;
use crate::service::WishlistService;

/// Trove - Browse a product catalog and keep a local wishlist.
#[derive(Parser, Debug)]
#[command(name = "trove")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file (defaults to ./trove.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the wishlist data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the product catalog
    Browse(BrowseArgs),

    /// List catalog categories
    Categories,

    /// Manage the saved wishlist
    #[command(subcommand)]
    Wishlist(WishlistCommand),
}

/// Arguments for `trove browse`
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Only show products whose title contains this term (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Only show products in this category id
    #[arg(long)]
    pub category: Option<u64>,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Products per page (defaults to the configured page size)
    #[arg(long)]
    pub per_page: Option<usize>,
}

/// Subcommands for `trove wishlist`
#[derive(Subcommand, Debug)]
pub enum WishlistCommand {
    /// Show the saved wishlist
    Show,

    /// Add a catalog product to the wishlist by id
    Add {
        /// Product id
        id: u64,
    },

    /// Remove a product from the wishlist by id
    Remove {
        /// Product id
        id: u64,
    },
}

/// Dispatch a parsed command against a loaded config.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let catalog = HttpCatalog::new(config.catalog.api_url.clone());
    let store = JsonFileStore::new(config.storage.resolve_data_dir());
    let service = WishlistService::new(store).with_policy(config.wishlist.policy());

    match cli.command {
        Commands::Browse(args) => browse::run(&catalog, &service, &config, args).await,
        Commands::Categories => categories::run(&catalog).await,
        Commands::Wishlist(command) => wishlist::run(&catalog, &service, command).await,
    }
}
