//! Cadence Source Handling
//!
//! Everything that looks inside a `.cdc` file:
//! - `classify`: heuristic file classification (contract / transaction / script)
//! - `imports`: symbolic import resolution and rewriting
//! - `parser`: declaration-level front-end consumed as a black box
//! - `arguments`: parameter extraction for transactions and scripts

pub mod arguments;
pub mod classify;
pub mod imports;
pub mod parser;

pub use arguments::{DeclarationRole, extract_arguments};
pub use classify::{FileKind, classify};
pub use imports::{RewriteOutcome, rewrite_imports};
pub use parser::{CadenceFrontend, Declaration, DeclarationParser, ParseFailure, Program};
