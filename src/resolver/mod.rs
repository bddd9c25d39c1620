//! Address Resolution
//!
//! Builds the per-request address map out of three imperfect,
//! partially-overlapping sources, merged by strict precedence:
//!
//! 1. manifest aliases (`flow.json`)
//! 2. addresses harvested from `README.md` and resolved via the chain
//! 3. the static well-known-contract registry
//!
//! A missing or malformed manifest, an invalid candidate address and a
//! failed account lookup each degrade to an empty contribution; nothing
//! in resolution aborts a request.

pub mod docs;
pub mod manifest;
pub mod registry;

use tracing::debug;

use crate::chain::{AccountReader, Network};
use crate::constants::repo::{MANIFEST_PATH, README_PATH};
use crate::provider::ContentProvider;
use crate::types::{AddressMap, File, Result};

pub use manifest::Manifest;

/// Build the contract name -> address map for one request.
pub async fn build_address_map(
    provider: &dyn ContentProvider,
    chain: &dyn AccountReader,
    owner: &str,
    repo: &str,
    network: Network,
    documents: &[File],
) -> AddressMap {
    let mut map = match fetch_manifest(provider, owner, repo).await {
        Ok(manifest) => manifest.alias_addresses(network),
        Err(error) => {
            debug!(
                repo = %format!("{owner}/{repo}"),
                error = %error,
                "no usable manifest, continuing without aliases"
            );
            AddressMap::new()
        }
    };

    for document in documents {
        if !document.path.eq_ignore_ascii_case(README_PATH) {
            continue;
        }
        let derived = docs::addresses_from_document(chain, network, document).await;
        merge_missing(&mut map, derived);
    }

    merge_missing(&mut map, registry::known_addresses(network));
    map
}

async fn fetch_manifest(
    provider: &dyn ContentProvider,
    owner: &str,
    repo: &str,
) -> Result<Manifest> {
    let bytes = provider.get(owner, repo, MANIFEST_PATH).await?;
    Manifest::parse(&bytes)
}

/// Add entries from `add` whose names are still unmapped.
fn merge_missing(map: &mut AddressMap, add: AddressMap) {
    for (name, address) in add {
        map.entry(name).or_insert(address);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use async_trait::async_trait;

    use super::*;
    use crate::provider::SearchHit;
    use crate::types::{FileType, ScoutError};

    struct StaticProvider {
        files: BTreeMap<String, Vec<u8>>,
    }

    #[async_trait]
    impl ContentProvider for StaticProvider {
        async fn get(&self, _owner: &str, _repo: &str, path: &str) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| ScoutError::NotFound {
                    path: path.to_string(),
                })
        }

        async fn search(
            &self,
            _owner: &str,
            _repo: &str,
            _extension: &str,
        ) -> Result<Vec<SearchHit>> {
            Ok(Vec::new())
        }

        async fn latest_revision(&self, _owner: &str, _repo: &str) -> Result<String> {
            Ok("rev".to_string())
        }
    }

    struct StaticChain {
        valid: BTreeSet<String>,
        accounts: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl AccountReader for StaticChain {
        async fn get_account(
            &self,
            _network: Network,
            address: &str,
        ) -> Result<BTreeMap<String, Vec<u8>>> {
            self.accounts
                .get(address)
                .cloned()
                .ok_or_else(|| ScoutError::chain(address, "unknown account"))
        }

        fn is_valid_address(&self, address: &str, _network: Network) -> bool {
            self.valid.contains(address)
        }
    }

    const DOC_ADDRESS: &str = "0x0123456789abcdef";

    fn readme(contents: &str) -> File {
        File::new(FileType::Document, "README.md", "README.md").with_contents(contents)
    }

    fn provider_with_manifest(json: &[u8]) -> StaticProvider {
        StaticProvider {
            files: BTreeMap::from([("flow.json".to_string(), json.to_vec())]),
        }
    }

    fn chain_with_account(contracts: &[&str]) -> StaticChain {
        StaticChain {
            valid: BTreeSet::from([DOC_ADDRESS.to_string()]),
            accounts: BTreeMap::from([(
                DOC_ADDRESS.to_string(),
                contracts
                    .iter()
                    .map(|name| (name.to_string(), Vec::new()))
                    .collect(),
            )]),
        }
    }

    #[tokio::test]
    async fn test_manifest_alias_wins_over_documentation_and_registry() {
        let provider = provider_with_manifest(
            br#"{"contracts":{"Foo":{"source":"./Foo.cdc","aliases":{"testnet":"0x01"}}}}"#,
        );
        let chain = chain_with_account(&["Foo", "Bar"]);
        let documents = vec![readme(&format!("Deployed at {DOC_ADDRESS}"))];

        let map = build_address_map(
            &provider,
            &chain,
            "owner",
            "repo",
            Network::Testnet,
            &documents,
        )
        .await;

        assert_eq!(map["Foo"], "01");
        assert_eq!(map["Bar"], "0123456789abcdef");
        assert_eq!(map["FungibleToken"], "9a0766d93b6608b7");
    }

    #[tokio::test]
    async fn test_documentation_wins_over_registry() {
        let provider = StaticProvider {
            files: BTreeMap::new(),
        };
        let chain = chain_with_account(&["FungibleToken"]);
        let documents = vec![readme(&format!("see {DOC_ADDRESS}"))];

        let map = build_address_map(
            &provider,
            &chain,
            "owner",
            "repo",
            Network::Testnet,
            &documents,
        )
        .await;

        assert_eq!(map["FungibleToken"], "0123456789abcdef");
    }

    #[tokio::test]
    async fn test_missing_manifest_still_resolves() {
        let provider = StaticProvider {
            files: BTreeMap::new(),
        };
        let chain = StaticChain {
            valid: BTreeSet::new(),
            accounts: BTreeMap::new(),
        };

        let map =
            build_address_map(&provider, &chain, "owner", "repo", Network::Mainnet, &[]).await;

        assert_eq!(map["FlowToken"], "1654653399040a61");
    }

    #[tokio::test]
    async fn test_malformed_manifest_is_tolerated() {
        let provider = provider_with_manifest(b"not json at all");
        let chain = StaticChain {
            valid: BTreeSet::new(),
            accounts: BTreeMap::new(),
        };

        let map =
            build_address_map(&provider, &chain, "owner", "repo", Network::Testnet, &[]).await;

        assert_eq!(map.len(), registry::known_addresses(Network::Testnet).len());
    }

    #[tokio::test]
    async fn test_only_readme_documents_are_scanned() {
        let provider = StaticProvider {
            files: BTreeMap::new(),
        };
        let chain = chain_with_account(&["Hidden"]);
        let documents = vec![
            File::new(FileType::Document, "docs/guide.md", "guide.md")
                .with_contents(format!("address {DOC_ADDRESS}")),
        ];

        let map = build_address_map(
            &provider,
            &chain,
            "owner",
            "repo",
            Network::Testnet,
            &documents,
        )
        .await;

        assert!(!map.contains_key("Hidden"));
    }

    #[tokio::test]
    async fn test_readme_filename_match_is_case_insensitive() {
        let provider = StaticProvider {
            files: BTreeMap::new(),
        };
        let chain = chain_with_account(&["Cased"]);
        let documents = vec![
            File::new(FileType::Document, "readme.md", "readme.md")
                .with_contents(format!("address {DOC_ADDRESS}")),
        ];

        let map = build_address_map(
            &provider,
            &chain,
            "owner",
            "repo",
            Network::Testnet,
            &documents,
        )
        .await;

        assert_eq!(map["Cased"], "0123456789abcdef");
    }

    #[tokio::test]
    async fn test_invalid_candidates_are_discarded() {
        let provider = StaticProvider {
            files: BTreeMap::new(),
        };
        // Account exists but the address never validates.
        let mut chain = chain_with_account(&["Foo"]);
        chain.valid.clear();
        let documents = vec![readme(&format!("address {DOC_ADDRESS}"))];

        let map = build_address_map(
            &provider,
            &chain,
            "owner",
            "repo",
            Network::Testnet,
            &documents,
        )
        .await;

        assert!(!map.contains_key("Foo"));
    }

    #[tokio::test]
    async fn test_failed_account_lookup_is_skipped() {
        let provider = StaticProvider {
            files: BTreeMap::new(),
        };
        // Validates, but the chain has no account to report.
        let chain = StaticChain {
            valid: BTreeSet::from([DOC_ADDRESS.to_string()]),
            accounts: BTreeMap::new(),
        };
        let documents = vec![readme(&format!("address {DOC_ADDRESS}"))];

        let map = build_address_map(
            &provider,
            &chain,
            "owner",
            "repo",
            Network::Testnet,
            &documents,
        )
        .await;

        assert_eq!(map.len(), registry::known_addresses(Network::Testnet).len());
    }
}
