use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod models;
mod services;
mod utils;

use config::Config;
use services::client::CatalogClient;
use services::session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they do not interleave with the rendered catalog.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog_ui=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env_and_args(&args);
    info!("Using catalog service at {}", config.catalog_url);

    let client = CatalogClient::new(config.catalog_url);
    let mut session = Session::new(client, BufReader::new(tokio::io::stdin()), std::io::stdout());
    session.run().await?;

    info!("Session closed with {} books in view", session.view().books().len());

    Ok(())
}
