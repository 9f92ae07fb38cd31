use crate::error::Result;
use crate::models::ContractSourceCode;
use crate::services::EtherscanClient;

const MODULE_NAME: &str = "contract";

/// Endpoints of the `contract` module.
#[derive(Debug, Clone, Copy)]
pub struct Contracts<'a> {
    client: &'a EtherscanClient,
}

impl<'a> Contracts<'a> {
    pub fn new(client: &'a EtherscanClient) -> Self {
        Self { client }
    }

    /// ABI of a verified contract, as the raw JSON text the API returns.
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/getabi>
    pub async fn get_abi(&self, address: &str) -> Result<String> {
        let payload = self
            .client
            .fetch_result(MODULE_NAME, "getabi", &[("address", address)])
            .await?;
        Ok(payload.into_text()?)
    }

    /// Verified source code and compiler settings. The API answers with a
    /// list even for a single address.
    ///
    /// <https://docs.etherscan.io/api-reference/endpoint/getsourcecode>
    pub async fn get_source_code(&self, address: &str) -> Result<Vec<ContractSourceCode>> {
        let records = self
            .client
            .fetch_result(MODULE_NAME, "getsourcecode", &[("address", address)])
            .await?
            .into_records()?;

        records.iter().map(ContractSourceCode::from_fields).collect()
    }
}
