use eyre::Result;
use num_bigint::BigUint;
use serde::Serialize;
use serde_json::json;

use crate::models::Commands;
use crate::services::EtherscanClient;
use crate::utils::hex::encode_quantity;

fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render_quantity(value: &BigUint) -> Result<String> {
    render(&json!({
        "hex": encode_quantity(value),
        "decimal": value.to_string(),
    }))
}

/// Run one subcommand and return what should be printed.
pub async fn run_command(client: &EtherscanClient, command: Commands) -> Result<String> {
    let contracts = client.contracts();
    let proxy = client.proxy();

    match command {
        Commands::Abi { address } => Ok(contracts.get_abi(&address).await?),
        Commands::Source { address } => render(&contracts.get_source_code(&address).await?),
        Commands::Tx { hash } => render(&proxy.get_transaction_by_hash(&hash).await?),
        Commands::BlockNumber => render_quantity(&proxy.get_block_number().await?),
        Commands::Block { tag } => render(&proxy.get_block_by_number(&tag).await?),
        Commands::SendRaw { hex } => Ok(proxy.send_raw_transaction(&hex).await?),
        Commands::BlockTxCount { tag } => {
            render_quantity(&proxy.get_transaction_count_by_number(&tag).await?)
        }
        Commands::Nonce { address } => {
            render_quantity(&proxy.get_transaction_count(&address).await?)
        }
        Commands::Receipt { hash } => render(&proxy.get_transaction_receipt(&hash).await?),
        Commands::GasPrice => render_quantity(&proxy.get_gas_price().await?),
    }
}
