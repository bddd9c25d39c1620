//! Global Constants
//!
//! Centralized constants for endpoints and repository layout.

/// GitHub API constants
pub mod github {
    /// REST v3 endpoint
    pub const DEFAULT_API_BASE: &str = "https://api.github.com";

    /// User agent sent with every request (GitHub rejects anonymous clients)
    pub const DEFAULT_USER_AGENT: &str = "flowscout";

    /// Results per search page. Only the first page is fetched; larger
    /// repositories are truncated at this bound.
    pub const SEARCH_PAGE_SIZE: u32 = 100;

    /// Request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Flow Access API constants
pub mod flow {
    /// Testnet REST endpoint
    pub const TESTNET_API_BASE: &str = "https://rest-testnet.onflow.org/v1";

    /// Mainnet REST endpoint
    pub const MAINNET_API_BASE: &str = "https://rest-mainnet.onflow.org/v1";

    /// Request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Repository layout constants
pub mod repo {
    /// Fixed well-known path of the project manifest
    pub const MANIFEST_PATH: &str = "flow.json";

    /// Only this documentation file is scanned for deployed addresses
    pub const README_PATH: &str = "README.md";

    /// Extension of documentation files
    pub const DOCUMENT_EXTENSION: &str = "md";

    /// Extension of Cadence source files
    pub const SOURCE_EXTENSION: &str = "cdc";
}
