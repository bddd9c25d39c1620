//! Project Manifest (`flow.json`) Parsing
//!
//! The manifest's `contracts` field maps contract names to either a bare
//! source path (simple form) or an object with per-network deployment
//! aliases (advanced form). The two forms are a sum type whose variant is
//! decided during decoding; simple-form entries contribute nothing to
//! address resolution.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::chain::Network;
use crate::types::{AddressMap, Result};

#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    contracts: BTreeMap<String, ContractEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContractEntry {
    /// Bare source path. Carries no deployment information.
    Simple(String),
    /// Source path plus per-network deployment aliases.
    Advanced {
        #[serde(default)]
        #[allow(dead_code)]
        source: String,
        #[serde(default)]
        aliases: BTreeMap<String, String>,
    },
}

impl Manifest {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Alias addresses declared for `network`, keys compared
    /// case-insensitively after trimming, `0x` prefixes stripped.
    pub fn alias_addresses(&self, network: Network) -> AddressMap {
        let mut map = AddressMap::new();
        for (name, entry) in &self.contracts {
            let ContractEntry::Advanced { aliases, .. } = entry else {
                continue;
            };
            for (alias_network, address) in aliases {
                if alias_network.trim().eq_ignore_ascii_case(network.as_str()) {
                    let stripped = address.strip_prefix("0x").unwrap_or(address);
                    map.insert(name.clone(), stripped.to_string());
                }
            }
        }
        map
    }
}
