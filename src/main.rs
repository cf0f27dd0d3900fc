use clap::Parser;
use tracing::error;
use trove::cli::{self, Cli};
use trove::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }

    config.init_logging();

    if let Err(e) = cli::run(cli, config).await {
        error!(error = %e, "command failed");
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
