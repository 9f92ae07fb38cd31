use std::fmt;
use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::{debug, trace};
use url::Url;

use crate::error::Result;
use crate::processors::{Contracts, Proxy};
use crate::services::chain::ChainId;
use crate::utils::response::{decode_result, ResultPayload};

/// Etherscan V2 multichain endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/v2/api";

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub chain_id: ChainId,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            chain_id: ChainId::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("chain_id", &self.chain_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    http: Option<HttpClient>,
}

impl ClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    pub fn chain_id(mut self, chain_id: impl Into<ChainId>) -> Self {
        self.config.chain_id = chain_id.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Whole-request timeout. Ignored when a preconfigured HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<EtherscanClient> {
        EtherscanClient::from_config(self.config, self.http)
    }
}

/// Builds Etherscan queries and performs the HTTP call.
///
/// Every request is a single GET whose query string starts with
/// `chainid`, `module`, `action` and `apikey`, followed by the endpoint
/// parameters in declaration order. The client holds no mutable state;
/// clone it or share it by reference across tasks.
#[derive(Clone)]
pub struct EtherscanClient {
    http: HttpClient,
    base_url: Url,
    api_key: String,
    chain_id: ChainId,
}

impl fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtherscanClient")
            .field("base_url", &self.base_url.as_str())
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

impl EtherscanClient {
    pub fn new(api_key: impl Into<String>, chain_id: impl Into<ChainId>) -> Result<Self> {
        Self::builder().api_key(api_key).chain_id(chain_id).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn from_config(config: ClientConfig, http: Option<HttpClient>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = match http {
            Some(http) => http,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
            chain_id: config.chain_id,
        })
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn contracts(&self) -> Contracts<'_> {
        Contracts::new(self)
    }

    pub fn proxy(&self) -> Proxy<'_> {
        Proxy::new(self)
    }

    /// Send one `module`/`action` query and return the raw response body.
    ///
    /// Non-2xx statuses are reported as transport errors.
    pub async fn send_request(
        &self,
        module: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        let chain_id = self.chain_id.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("chainid", chain_id.as_str()),
            ("module", module),
            ("action", action),
            ("apikey", self.api_key.as_str()),
        ];
        query.extend_from_slice(params);

        debug!(module, action, chain_id = %self.chain_id, "sending etherscan request");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&query)
            .send()
            .await?
            .error_for_status()?;
        let status = response.status();
        let body = response.bytes().await?;

        trace!(%status, bytes = body.len(), "received etherscan response");

        Ok(body.to_vec())
    }

    /// Send a query and decode the `result` member of its envelope.
    pub(crate) async fn fetch_result(
        &self,
        module: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<ResultPayload> {
        let body = self.send_request(module, action, params).await?;
        Ok(decode_result(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_to_mainnet_v2_endpoint() {
        let client = EtherscanClient::new("key", ChainId::EthereumMainnet).unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.chain_id(), ChainId::EthereumMainnet);
    }

    #[test]
    fn builder_overrides() {
        let client = EtherscanClient::builder()
            .api_key("key")
            .chain_id(8453u64)
            .base_url("http://127.0.0.1:9999/v2/api")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.chain_id(), ChainId::Base);
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9999/v2/api");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let error = EtherscanClient::builder()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(error, Error::InvalidUrl(_)));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = EtherscanClient::new("super-secret", ChainId::Sepolia).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("Sepolia"));

        let config = ClientConfig {
            api_key: "super-secret".to_string(),
            ..ClientConfig::default()
        };
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
