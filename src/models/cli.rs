use clap::{Args, Parser, Subcommand};

use crate::services::{ChainId, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the Etherscan contract and proxy APIs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Etherscan API key
    #[arg(short = 'k', long, env = "ETHERSCAN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Decimal chain id (1 = Ethereum mainnet, 8453 = Base, ...)
    #[arg(short, long, env = "ETHERSCAN_CHAIN_ID", default_value = "1")]
    pub chain_id: ChainId,

    /// API endpoint
    #[arg(long, env = "ETHERSCAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// ABI of a verified contract
    Abi {
        address: String,
    },

    /// Verified source code of a contract
    Source {
        address: String,
    },

    /// Transaction by hash
    Tx {
        hash: String,
    },

    /// Most recent block number
    BlockNumber,

    /// Block by hex number (e.g. 0x10d4f)
    Block {
        tag: String,
    },

    /// Broadcast a signed raw transaction
    SendRaw {
        hex: String,
    },

    /// Transaction count of a block, by hex number
    BlockTxCount {
        tag: String,
    },

    /// Transaction count (nonce) of an address
    Nonce {
        address: String,
    },

    /// Transaction receipt by hash
    Receipt {
        hash: String,
    },

    /// Current gas price in wei
    GasPrice,
}
