//! FlowScout - Cadence Repository Manifest Extractor
//!
//! Inspects a hosted repository of Cadence smart-contract sources and
//! produces a structured manifest of its contract-related artifacts:
//! which files are deployable contracts, callable transactions or
//! read-only scripts, with symbolic imports rewritten to deployed
//! addresses and the typed parameter list each executable expects.
//!
//! ## Pipeline
//!
//! 1. **Collect documentation** - every `.md` file becomes a Document
//! 2. **Resolve addresses** - merge `flow.json` aliases, addresses
//!    harvested from `README.md`, and the well-known-contract registry
//!    (strict precedence, in that order)
//! 3. **Classify sources** - heuristic contract / transaction / script
//!    patterns, first match wins
//! 4. **Rewrite & extract** - address-qualify symbolic imports and pull
//!    parameter lists through the declaration front-end
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use flowscout::{ConfigLoader, FlowAccessClient, GithubClient, Processor};
//!
//! let config = ConfigLoader::load()?;
//! let processor = Processor::new(
//!     Arc::new(GithubClient::new(&config.github)?),
//!     Arc::new(FlowAccessClient::new(&config.flow)?),
//! );
//! let result = processor.process("onflow", "flow-core-contracts", "testnet").await?;
//! ```
//!
//! ## Modules
//!
//! - [`cadence`]: classification, import rewriting, declaration parsing
//! - [`resolver`]: address map construction from manifest, docs, registry
//! - [`provider`]: repository content collaborator (GitHub REST)
//! - [`chain`]: Flow account reads and address validation
//! - [`pipeline`]: per-request orchestration

pub mod cadence;
pub mod chain;
pub mod config;
pub mod constants;
pub mod metrics;
pub mod pipeline;
pub mod provider;
pub mod resolver;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, FlowConfig, GithubConfig};

// Error Types
pub use types::error::{Result, ScoutError};

// Records
pub use types::artifact::{
    AddressMap, Argument, DeployedFile, ExecutableFile, File, FileType, ProcessResult,
};

// Collaborators
pub use chain::flow::FlowAccessClient;
pub use chain::{AccountReader, Network};
pub use provider::github::GithubClient;
pub use provider::{ContentProvider, SearchHit};

// Pipeline
pub use cadence::{CadenceFrontend, DeclarationParser};
pub use metrics::{MetricsSink, NullSink, ProcessMetrics};
pub use pipeline::Processor;
