mod browse;
mod check;
mod render;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "zencat")]
#[command(about = "Zen storefront catalog browser")]
struct Cli {
    /// Path to the scraped catalog JSON, overriding ZENCAT_CATALOG_PATH.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the catalog as a themed card grid.
    Browse {
        /// Sort token: priceAsc / priceDesc, or anything else for source
        /// order.
        #[arg(long)]
        sort: Option<String>,

        /// Presentation theme: light or dark.
        #[arg(long)]
        theme: Option<String>,
    },
    /// Validate a feed file and report what a load would keep and drop.
    Check,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = zencat_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let catalog_path = cli.catalog.unwrap_or_else(|| config.catalog_path.clone());

    match cli.command {
        Some(Commands::Browse { sort, theme }) => {
            browse::run_browse(&config, &catalog_path, sort.as_deref(), theme.as_deref())
        }
        Some(Commands::Check) => check::run_check(&catalog_path),
        // Bare `zencat` browses with the configured defaults.
        None => browse::run_browse(&config, &catalog_path, None, None),
    }
}
