mod chain;
mod client;

pub use chain::ChainId;
pub use client::{ClientBuilder, ClientConfig, EtherscanClient, DEFAULT_BASE_URL};
