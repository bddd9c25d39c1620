//! Flow Access API Client
//!
//! Account reads against the public Access node REST endpoints. One client
//! serves both networks; the endpoint is selected per call. Contract
//! sources arrive base64-encoded in the account expansion.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{AccountReader, Network, address};
use crate::config::FlowConfig;
use crate::types::{Result, ScoutError};

/// REST client for Flow Access nodes.
#[derive(Debug, Clone)]
pub struct FlowAccessClient {
    client: reqwest::Client,
    testnet_base: Url,
    mainnet_base: Url,
}

/// Account expansion, reduced to the contracts we consume.
#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(default)]
    contracts: BTreeMap<String, String>,
}

impl FlowAccessClient {
    pub fn new(config: &FlowConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            testnet_base: Url::parse(&config.testnet_api_base)?,
            mainnet_base: Url::parse(&config.mainnet_api_base)?,
        })
    }

    fn base(&self, network: Network) -> &Url {
        match network {
            Network::Testnet => &self.testnet_base,
            Network::Mainnet => &self.mainnet_base,
        }
    }
}

#[async_trait]
impl AccountReader for FlowAccessClient {
    async fn get_account(
        &self,
        network: Network,
        address: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>> {
        let hex = address.strip_prefix("0x").unwrap_or(address);
        let url = format!("{}/accounts/{}", self.base(network), hex);

        debug!(network = %network, address = hex, "fetching account");

        let response = self
            .client
            .get(&url)
            .query(&[("expand", "contracts")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScoutError::chain(
                hex,
                format!("access node returned {}", response.status()),
            ));
        }

        let account: AccountResponse = response.json().await?;

        let mut contracts = BTreeMap::new();
        for (name, encoded) in account.contracts {
            let source = BASE64
                .decode(encoded.as_bytes())
                .map_err(|e| ScoutError::decode(format!("0x{hex}/{name}"), e.to_string()))?;
            contracts.insert(name, source);
        }
        Ok(contracts)
    }

    fn is_valid_address(&self, input: &str, network: Network) -> bool {
        address::is_valid(input, network)
    }
}
