use clap::{Parser, Subcommand};

use storefront_client::ApiClient;
use storefront_core::AppConfig;

mod browse;
mod search;
mod suggest;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse a category listing with filters and sorting.
    Browse(browse::BrowseArgs),
    /// Run a one-shot product search.
    Search(search::SearchArgs),
    /// Interactive debounced search suggestions (reads queries from stdin).
    Suggest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = storefront_core::load_app_config_from_env()?;
    let client = build_client(&config)?;

    match cli.command {
        Commands::Browse(args) => browse::run(&config, &client, args).await,
        Commands::Search(args) => search::run(&client, args).await,
        Commands::Suggest => suggest::run(&config, &client).await,
    }
}

fn build_client(config: &AppConfig) -> anyhow::Result<ApiClient> {
    Ok(ApiClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?)
}
