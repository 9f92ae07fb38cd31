#![allow(dead_code)]

use etherscan_api::{ChainId, EtherscanClient};
use mockito::{Matcher, Mock, ServerGuard};

pub const API_PATH: &str = "/v2/api";

pub fn client_for(server: &ServerGuard) -> EtherscanClient {
    EtherscanClient::builder()
        .api_key("apiKey")
        .chain_id(ChainId::EthereumMainnet)
        .base_url(format!("{}{API_PATH}", server.url()))
        .build()
        .expect("mock server url is valid")
}

/// Expect exactly one GET with this exact query string and answer with `body`.
pub async fn expect_query(server: &mut ServerGuard, query: &str, body: &str) -> Mock {
    server
        .mock("GET", API_PATH)
        .match_query(Matcher::Exact(query.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create_async()
        .await
}
