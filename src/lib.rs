//! Typed client for the Etherscan API.
//!
//! [`EtherscanClient`] builds and sends queries; [`Contracts`] and [`Proxy`]
//! expose one method per endpoint and map each JSON response into a plain
//! record. Hex quantities the records need as numbers (block numbers, gas
//! price, counts) decode to exact [`BigUint`] values; every other hex value
//! (hashes, addresses, blooms, raw amounts) is kept as the string the API sent.
//!
//! ```no_run
//! # async fn demo() -> etherscan_api::Result<()> {
//! use etherscan_api::{ChainId, EtherscanClient};
//!
//! let client = EtherscanClient::new("YOUR_API_KEY", ChainId::EthereumMainnet)?;
//! let latest = client.proxy().get_block_number().await?;
//! let block = client.proxy().get_block_by_number(&format!("0x{latest:x}")).await?;
//! println!("{} transactions", block.transactions.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod processors;
pub mod services;
pub mod utils;

pub use error::{DecodeError, Error, HexParseError, MappingError, Result};
pub use models::{
    BlockInfo, ContractSourceCode, TransactionByHashInfo, TransactionReceipt,
    TransactionReceiptLog,
};
pub use num_bigint::BigUint;
pub use processors::{Contracts, Proxy};
pub use services::{ChainId, ClientBuilder, ClientConfig, EtherscanClient, DEFAULT_BASE_URL};
