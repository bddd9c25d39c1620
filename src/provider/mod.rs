//! Repository Content Provider
//!
//! Collaborator trait for reading files out of a hosted repository, plus
//! the GitHub REST implementation. The search interface returns the first
//! result page only; completeness against arbitrarily large repositories
//! is explicitly not guaranteed.

pub mod github;

use async_trait::async_trait;

use crate::types::Result;

/// One code-search result entry, in the order the host returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub path: String,
    pub filename: String,
}

/// Read access to a hosted repository.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Raw contents of the file at `path`. `ScoutError::NotFound` when the
    /// file does not exist.
    async fn get(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<u8>>;

    /// All files with the given extension, first result page only.
    async fn search(&self, owner: &str, repo: &str, extension: &str) -> Result<Vec<SearchHit>>;

    /// Identifier of the latest revision, the caller-side cache
    /// fingerprint input.
    async fn latest_revision(&self, owner: &str, repo: &str) -> Result<String>;
}
