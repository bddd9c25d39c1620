//! Artifact records produced by repository processing.
//!
//! The wire shape mirrors what clients consume: four ordered sequences of
//! tagged file records. Sequence order is the order the code-search
//! collaborator returned entries, never re-sorted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chain::Network;

/// Contract name -> hex address, no `0x` prefix.
///
/// Built fresh per request and treated as immutable once handed to the
/// import rewriter.
pub type AddressMap = BTreeMap<String, String>;

/// Record tag. Classification is exclusive: a file yields at most one
/// non-Document variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    Document,
    Contract,
    Script,
    Transaction,
}

/// A repository file plus the errors collected while processing it.
///
/// A file with an unresolved import or a parse failure still appears in its
/// classified sequence, carrying the error instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub path: String,
    pub filename: String,
    pub contents: String,
    pub errors: Vec<String>,
}

impl File {
    pub fn new(file_type: FileType, path: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            file_type,
            path: path.into(),
            filename: filename.into(),
            contents: String::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }
}

/// A contract record. `address` is absent when the contract name was not in
/// the resolved address map; `contents` then holds the repository copy
/// instead of the canonical on-chain source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedFile {
    #[serde(flatten)]
    pub file: File,
    pub address: Option<String>,
    pub network: Network,
}

/// A transaction or script record with its extracted parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableFile {
    #[serde(flatten)]
    pub file: File,
    pub arguments: Vec<Argument>,
}

/// One declared parameter of a transaction or entry function, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// One processing snapshot for (owner, repo, network, revision).
///
/// Immutable once produced. The core performs no caching; an enclosing
/// layer derives a fingerprint from the repository identity, the network
/// and [`crate::provider::ContentProvider::latest_revision`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub documents: Vec<File>,
    pub contracts: Vec<DeployedFile>,
    pub scripts: Vec<ExecutableFile>,
    pub transactions: Vec<ExecutableFile>,
}
