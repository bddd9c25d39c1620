//! Processing Metrics
//!
//! Counters are an explicit sink injected into the orchestrator, never
//! ambient global state. The default [`NullSink`] drops everything;
//! [`ProcessMetrics`] aggregates with atomics and is safe to share across
//! concurrent requests.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::chain::Network;
use crate::types::FileType;

/// Sink for processing counters.
pub trait MetricsSink: Send + Sync {
    fn request_started(&self, _owner: &str, _repo: &str, _network: Network) {}
    fn file_processed(&self, _file_type: FileType) {}
    fn import_unresolved(&self) {}
}

/// Discards every observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MetricsSink for NullSink {}

/// Atomic counter aggregation.
#[derive(Debug, Default)]
pub struct ProcessMetrics {
    requests: AtomicU64,
    documents: AtomicU64,
    contracts: AtomicU64,
    scripts: AtomicU64,
    transactions: AtomicU64,
    unresolved_imports: AtomicU64,
}

/// Point-in-time snapshot of [`ProcessMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub requests: u64,
    pub documents: u64,
    pub contracts: u64,
    pub scripts: u64,
    pub transactions: u64,
    pub unresolved_imports: u64,
}

impl ProcessMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests: self.requests.load(Ordering::Relaxed),
            documents: self.documents.load(Ordering::Relaxed),
            contracts: self.contracts.load(Ordering::Relaxed),
            scripts: self.scripts.load(Ordering::Relaxed),
            transactions: self.transactions.load(Ordering::Relaxed),
            unresolved_imports: self.unresolved_imports.load(Ordering::Relaxed),
        }
    }
}

impl MetricsSink for ProcessMetrics {
    fn request_started(&self, _owner: &str, _repo: &str, _network: Network) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    fn file_processed(&self, file_type: FileType) {
        let counter = match file_type {
            FileType::Document => &self.documents,
            FileType::Contract => &self.contracts,
            FileType::Script => &self.scripts,
            FileType::Transaction => &self.transactions,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn import_unresolved(&self) {
        self.unresolved_imports.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = ProcessMetrics::new();
        metrics.request_started("owner", "repo", Network::Testnet);
        metrics.file_processed(FileType::Document);
        metrics.file_processed(FileType::Script);
        metrics.file_processed(FileType::Script);
        metrics.import_unresolved();

        let summary = metrics.summary();
        assert_eq!(summary.requests, 1);
        assert_eq!(summary.documents, 1);
        assert_eq!(summary.scripts, 2);
        assert_eq!(summary.contracts, 0);
        assert_eq!(summary.unresolved_imports, 1);
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let sink = NullSink;
        sink.request_started("owner", "repo", Network::Mainnet);
        sink.file_processed(FileType::Contract);
        sink.import_unresolved();
    }
}
