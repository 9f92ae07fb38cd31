use std::time::Duration;

use clap::Parser;
use etherscan_api::handlers::run_command;
use etherscan_api::models::Cli;
use etherscan_api::EtherscanClient;
use eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "etherscan_api=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let connection = cli.connection;

    let client = EtherscanClient::builder()
        .api_key(connection.api_key)
        .chain_id(connection.chain_id)
        .base_url(&connection.base_url)
        .timeout(Duration::from_secs(connection.timeout))
        .build()
        .wrap_err_with(|| format!("failed to set up client for {}", connection.base_url))?;

    info!(chain_id = %client.chain_id(), "querying {}", client.base_url());

    let output = run_command(&client, cli.command).await?;
    println!("{output}");

    Ok(())
}
