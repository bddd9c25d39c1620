//! File Classification
//!
//! Heuristic, pattern-based classification of Cadence source text. The
//! checks run in a fixed order and the first match wins: a contract
//! declaration beats a transaction block beats an entry function. A file
//! matching none of the patterns is excluded from processing entirely.
//!
//! This is deliberately not grammar-aware; false positives (say, a
//! contract that embeds a `pub fun main`) are resolved by the precedence
//! order alone.

use std::sync::LazyLock;

use regex::Regex;

static CONTRACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pub contract (.*)\{").expect("valid contract pattern"));

static TRANSACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"transaction(.*)\{").expect("valid transaction pattern"));

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pub fun main(.*)\{").expect("valid script pattern"));

/// Classification outcome. At most one kind per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    Contract { name: String },
    Transaction,
    Script,
}

/// Classify raw source text, first matching pattern wins.
pub fn classify(code: &str) -> Option<FileKind> {
    if let Some(captures) = CONTRACT_RE.captures(code) {
        return Some(FileKind::Contract {
            name: captures[1].trim().to_string(),
        });
    }
    if TRANSACTION_RE.is_match(code) {
        return Some(FileKind::Transaction);
    }
    if SCRIPT_RE.is_match(code) {
        return Some(FileKind::Script);
    }
    None
}
