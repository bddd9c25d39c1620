//! Document Address Scanner
//!
//! Harvests deployed addresses out of prose documentation. Any
//! `0x`-prefixed 16-digit hex token is a candidate; candidates that fail
//! the network's address rule are dropped silently, and candidates the
//! chain knows nothing about are logged and skipped. Every contract the
//! chain reports at a surviving address maps to that address.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::chain::{AccountReader, Network};
use crate::types::{AddressMap, File};

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[0-9a-fA-F]{16}").expect("valid address pattern"));

/// Contract names resolvable through addresses mentioned in `document`.
pub async fn addresses_from_document(
    chain: &dyn AccountReader,
    network: Network,
    document: &File,
) -> AddressMap {
    let candidates: BTreeSet<&str> = ADDRESS_RE
        .find_iter(&document.contents)
        .map(|m| m.as_str())
        .collect();

    let mut map = AddressMap::new();
    for candidate in candidates {
        if !chain.is_valid_address(candidate, network) {
            debug!(
                file = %document.path,
                address = candidate,
                "discarding candidate address"
            );
            continue;
        }

        let contracts = match chain.get_account(network, candidate).await {
            Ok(contracts) => contracts,
            Err(error) => {
                warn!(
                    file = %document.path,
                    address = candidate,
                    error = %error,
                    "account lookup failed, skipping address"
                );
                continue;
            }
        };

        let stripped = candidate.strip_prefix("0x").unwrap_or(candidate);
        for name in contracts.keys() {
            map.insert(name.clone(), stripped.to_string());
        }
    }
    map
}
