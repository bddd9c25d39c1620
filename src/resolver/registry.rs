//! Well-Known Contract Registry
//!
//! Framework contracts every Flow network ships with, used as the
//! lowest-precedence resolution source. Addresses are stored without the
//! `0x` prefix, like every other entry in an address map.

use crate::chain::Network;
use crate::types::AddressMap;

const MAINNET: &[(&str, &str)] = &[
    ("FungibleToken", "f233dcee88fe0abe"),
    ("NonFungibleToken", "1d7e57aa55817448"),
    ("MetadataViews", "1d7e57aa55817448"),
    ("FlowToken", "1654653399040a61"),
    ("FlowStorageFees", "e467b9dd11fa00df"),
];

const TESTNET: &[(&str, &str)] = &[
    ("FungibleToken", "9a0766d93b6608b7"),
    ("NonFungibleToken", "631e88ae7f1d7c20"),
    ("MetadataViews", "631e88ae7f1d7c20"),
    ("FlowToken", "7e60df042a9c0868"),
    ("FlowStorageFees", "8c5303eaa26202d6"),
];

/// Registry entries for `network`.
pub fn known_addresses(network: Network) -> AddressMap {
    let entries = match network {
        Network::Mainnet => MAINNET,
        Network::Testnet => TESTNET,
    };
    entries
        .iter()
        .map(|(name, address)| (name.to_string(), address.to_string()))
        .collect()
}
