use num_bigint::BigUint;

use crate::error::Result;
use crate::models::{BlockInfo, TransactionByHashInfo, TransactionReceipt};
use crate::services::EtherscanClient;
use crate::utils::hex::decode_quantity;
use crate::utils::response::ResultPayload;

const MODULE_NAME: &str = "proxy";

/// Geth/Parity JSON-RPC calls relayed through the `proxy` module.
#[derive(Debug, Clone, Copy)]
pub struct Proxy<'a> {
    client: &'a EtherscanClient,
}

fn quantity(payload: ResultPayload) -> Result<BigUint> {
    let raw = payload.into_text()?;
    Ok(decode_quantity(&raw)?)
}

impl<'a> Proxy<'a> {
    pub fn new(client: &'a EtherscanClient) -> Self {
        Self { client }
    }

    async fn call(&self, action: &str, params: &[(&str, &str)]) -> Result<ResultPayload> {
        self.client.fetch_result(MODULE_NAME, action, params).await
    }

    /// <https://docs.etherscan.io/api-reference/endpoint/ethgettransactionbyhash>
    pub async fn get_transaction_by_hash(&self, hash: &str) -> Result<TransactionByHashInfo> {
        let fields = self
            .call("eth_getTransactionByHash", &[("txhash", hash)])
            .await?
            .into_fields()?;
        TransactionByHashInfo::from_fields(&fields)
    }

    /// Number of the most recent block.
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/ethblocknumber>
    pub async fn get_block_number(&self) -> Result<BigUint> {
        quantity(self.call("eth_blockNumber", &[]).await?)
    }

    /// Block by hex number, with transaction hashes rather than full objects.
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/ethgetblockbynumber>
    pub async fn get_block_by_number(&self, hex_block_number: &str) -> Result<BlockInfo> {
        let fields = self
            .call(
                "eth_getBlockByNumber",
                &[("tag", hex_block_number), ("boolean", "false")],
            )
            .await?
            .into_fields()?;
        BlockInfo::from_fields(&fields)
    }

    /// Broadcast a signed transaction and return its hash. `hex` is sent as given.
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/ethsendrawtransaction>
    pub async fn send_raw_transaction(&self, hex: &str) -> Result<String> {
        let payload = self.call("eth_sendRawTransaction", &[("hex", hex)]).await?;
        Ok(payload.into_text()?)
    }

    /// Number of transactions in the block with the given hex number.
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/ethgetblocktransactioncountbynumber>
    pub async fn get_transaction_count_by_number(&self, hex_block_number: &str) -> Result<BigUint> {
        quantity(
            self.call("eth_getBlockTransactionCountByNumber", &[("tag", hex_block_number)])
                .await?,
        )
    }

    /// Number of transactions sent from `address` (its nonce).
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/ethgettransactioncount>
    pub async fn get_transaction_count(&self, address: &str) -> Result<BigUint> {
        quantity(
            self.call("eth_getTransactionCount", &[("address", address)])
                .await?,
        )
    }

    /// <https://docs.etherscan.io/api-reference/endpoint/ethgettransactionreceipt>
    pub async fn get_transaction_receipt(&self, hash: &str) -> Result<TransactionReceipt> {
        let fields = self
            .call("eth_getTransactionReceipt", &[("txhash", hash)])
            .await?
            .into_fields()?;
        TransactionReceipt::from_fields(&fields)
    }

    /// Current gas price in wei.
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/ethgasprice>
    pub async fn get_gas_price(&self) -> Result<BigUint> {
        quantity(self.call("eth_gasPrice", &[]).await?)
    }
}
