use num_bigint::BigUint;
use serde::Serialize;

use crate::error::Result;
use crate::utils::fields::Fields;
use crate::utils::hex::serialize_quantity;

/// `eth_getTransactionByHash` result.
///
/// Only `block_number` is converted; every other quantity stays the hex
/// string the node returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionByHashInfo {
    pub block_hash: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub block_number: BigUint,
    pub from: String,
    pub gas: String,
    pub gas_price: String,
    /// Present only on fee-market (type 2 and later) transactions.
    pub max_fee_per_gas: Option<String>,
    pub max_priority_fee_per_gas: Option<String>,
    pub hash: String,
    pub input: String,
    pub nonce: String,
    pub to: String,
    pub transaction_index: String,
    pub value: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl TransactionByHashInfo {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            block_hash: fields.required_string("blockHash")?,
            block_number: fields.required_quantity("blockNumber")?,
            from: fields.required_string("from")?,
            gas: fields.required_string("gas")?,
            gas_price: fields.required_string("gasPrice")?,
            max_fee_per_gas: fields.optional_string("maxFeePerGas")?,
            max_priority_fee_per_gas: fields.optional_string("maxPriorityFeePerGas")?,
            hash: fields.required_string("hash")?,
            input: fields.required_string("input")?,
            nonce: fields.required_string("nonce")?,
            to: fields.required_string("to")?,
            transaction_index: fields.required_string("transactionIndex")?,
            value: fields.required_string("value")?,
            transaction_type: fields.required_string("type")?,
        })
    }
}

/// `eth_getBlockByNumber` result with transaction hashes only.
/// No field is converted, `number` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub base_fee_per_gas: String,
    pub difficulty: String,
    pub extra_data: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub hash: String,
    pub logs_bloom: String,
    pub miner: String,
    pub mix_hash: String,
    pub nonce: String,
    pub number: String,
    pub parent_hash: String,
    pub receipts_root: String,
    pub sha3_uncles: String,
    pub size: String,
    pub state_root: String,
    pub timestamp: String,
    pub total_difficulty: String,
    pub transactions: Vec<String>,
    pub transactions_root: String,
    pub uncles: Vec<String>,
}

impl BlockInfo {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            base_fee_per_gas: fields.required_string("baseFeePerGas")?,
            difficulty: fields.required_string("difficulty")?,
            extra_data: fields.required_string("extraData")?,
            gas_limit: fields.required_string("gasLimit")?,
            gas_used: fields.required_string("gasUsed")?,
            hash: fields.required_string("hash")?,
            logs_bloom: fields.required_string("logsBloom")?,
            miner: fields.required_string("miner")?,
            mix_hash: fields.required_string("mixHash")?,
            nonce: fields.required_string("nonce")?,
            number: fields.required_string("number")?,
            parent_hash: fields.required_string("parentHash")?,
            receipts_root: fields.required_string("receiptsRoot")?,
            sha3_uncles: fields.required_string("sha3Uncles")?,
            size: fields.required_string("size")?,
            state_root: fields.required_string("stateRoot")?,
            timestamp: fields.required_string("timestamp")?,
            total_difficulty: fields.required_string("totalDifficulty")?,
            transactions: fields.required_strings("transactions")?,
            transactions_root: fields.required_string("transactionsRoot")?,
            uncles: fields.required_strings("uncles")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceiptLog {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub block_number: BigUint,
    pub transaction_hash: String,
    pub transaction_index: String,
    pub log_index: String,
    pub block_hash: String,
    pub removed: bool,
}

impl TransactionReceiptLog {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            address: fields.required_string("address")?,
            topics: fields.required_strings("topics")?,
            data: fields.required_string("data")?,
            block_number: fields.required_quantity("blockNumber")?,
            transaction_hash: fields.required_string("transactionHash")?,
            transaction_index: fields.required_string("transactionIndex")?,
            log_index: fields.required_string("logIndex")?,
            block_hash: fields.required_string("blockHash")?,
            removed: fields.required_bool("removed")?,
        })
    }
}

/// `eth_getTransactionReceipt` result. Logs keep their emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub block_hash: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub block_number: BigUint,
    /// `None` unless the transaction created a contract; the key itself must be present.
    pub contract_address: Option<String>,
    pub cumulative_gas_used: String,
    pub from: String,
    pub gas_used: String,
    pub logs: Vec<TransactionReceiptLog>,
    pub logs_bloom: String,
    pub status: String,
    pub to: String,
    pub transaction_hash: String,
    pub transaction_index: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl TransactionReceipt {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let logs = fields
            .required_records("logs")?
            .iter()
            .map(TransactionReceiptLog::from_fields)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            block_hash: fields.required_string("blockHash")?,
            block_number: fields.required_quantity("blockNumber")?,
            contract_address: fields.nullable_string("contractAddress")?,
            cumulative_gas_used: fields.required_string("cumulativeGasUsed")?,
            from: fields.required_string("from")?,
            gas_used: fields.required_string("gasUsed")?,
            logs,
            logs_bloom: fields.required_string("logsBloom")?,
            status: fields.required_string("status")?,
            to: fields.required_string("to")?,
            transaction_hash: fields.required_string("transactionHash")?,
            transaction_index: fields.required_string("transactionIndex")?,
            transaction_type: fields.required_string("type")?,
        })
    }
}
