use std::path::PathBuf;

use anyhow::Result;
use catalog_client::{CatalogStore, HttpCatalogClient};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod steps;

use config::{load_settings, prepare_catalog_url};
use steps::{apply_steps, load_catalog, step_help, Step};

#[derive(Parser, Debug)]
#[command(about = "Browse a remote product catalog")]
struct Cli {
    #[arg(long, default_value = "catalog.toml")]
    config: PathBuf,
    /// Overrides the configured catalog endpoint.
    #[arg(long)]
    catalog_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the catalog and apply view steps in order.
    View {
        #[arg(long)]
        json: bool,
        #[arg(value_name = "STEP", help = step_help())]
        steps: Vec<Step>,
    },
    /// List the categories present in the catalog.
    Categories,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = load_settings(&cli.config)?;
    if let Some(url) = cli.catalog_url {
        settings.catalog_url = url;
    }
    let client = HttpCatalogClient::new(prepare_catalog_url(&settings.catalog_url)?);
    info!(catalog_url = client.catalog_url(), "fetching catalog");

    let store = CatalogStore::new(client);
    load_catalog(&store).await?;

    match cli.command {
        Command::View { json, steps } => {
            apply_steps(&store, &steps).await;
            let items = store.items().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print!("{}", render::product_table(&items));
            }
        }
        Command::Categories => {
            let items = store.items().await;
            for category in render::categories(&items) {
                println!("{category}");
            }
        }
    }

    Ok(())
}
