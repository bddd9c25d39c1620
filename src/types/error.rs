//! Unified Error Type System
//!
//! Centralized error types for the entire crate.
//!
//! Only two conditions abort a whole request: failing to enumerate
//! repository files and failing to resolve a network. Every other failure
//! is downgraded by the caller into a per-file error string or a log line,
//! so a request that can list files always returns a complete result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("not found: {path}")]
    NotFound { path: String },

    #[error("unknown network '{0}' (expected 'testnet' or 'mainnet')")]
    UnknownNetwork(String),

    #[error("code search for extension '{extension}' failed: {message}")]
    Search { extension: String, message: String },

    #[error("account lookup for 0x{address} failed: {message}")]
    Chain { address: String, message: String },

    #[error("payload decode error for {path}: {message}")]
    Decode { path: String, message: String },

    #[error("no commits available for {repo}")]
    NoCommits { repo: String },

    #[error("config error: {0}")]
    Config(String),
}

impl ScoutError {
    /// True for a missing-file condition, which most call sites tolerate.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Create a chain lookup error with address context.
    pub fn chain(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Chain {
            address: address.into(),
            message: message.into(),
        }
    }

    /// Create a decode error with path context.
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
