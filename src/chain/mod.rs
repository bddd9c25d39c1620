//! Chain Access Module
//!
//! Flow account reads and address validation:
//! - `Network`: the two supported chains, parsed fail-fast from request input
//! - `AccountReader`: collaborator trait the resolver and orchestrator consume
//! - `flow`: REST implementation against Flow Access nodes
//! - `address`: linear-code address validation

pub mod address;
pub mod flow;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{Result, ScoutError};

/// Target chain for one request.
///
/// Anything outside this set is an explicit error at request entry rather
/// than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    /// Parse a caller-supplied network name, case-insensitive and trimmed.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("testnet") {
            Ok(Self::Testnet)
        } else if trimmed.eq_ignore_ascii_case("mainnet") {
            Ok(Self::Mainnet)
        } else {
            Err(ScoutError::UnknownNetwork(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Read access to on-chain accounts.
///
/// Implementations are stateless and shared across requests. Lookup
/// failures are per-address conditions: callers downgrade them to log
/// entries or per-file errors, they never abort a request.
#[async_trait]
pub trait AccountReader: Send + Sync {
    /// Contracts deployed at `address` (16 hex digits, optional `0x`),
    /// keyed by contract name.
    async fn get_account(
        &self,
        network: Network,
        address: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>>;

    /// Whether `address` is well-formed and passes the network's checksum.
    fn is_valid_address(&self, address: &str, network: Network) -> bool;
}
