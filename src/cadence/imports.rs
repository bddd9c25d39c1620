//! Import Rewriting
//!
//! Rewrites symbolic contract imports into address-qualified form using a
//! resolved address map. Two clause syntaxes are recognized and processed
//! additively:
//!
//! - qualified-source: `import Name from <source>` — left untouched when
//!   the source is already a literal hex address
//! - bare-name: `import "Name"` — always looked up
//!
//! Resolution is best-effort per clause: a miss records an error string and
//! leaves the clause unchanged without affecting sibling clauses. Applying
//! the rewriter to its own output is a no-op, since rewritten clauses carry
//! a literal address and no longer match the bare-name pattern.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::AddressMap;

static QUALIFIED_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"import (?P<contract>\w+)\s*from\s*(?P<source>.*)").expect("valid import pattern")
});

static BARE_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import "(?P<contract>\w+)""#).expect("valid bare import pattern")
});

/// Rewritten source plus the resolution errors, in order of first
/// occurrence in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub contents: String,
    pub errors: Vec<String>,
}

/// One recognized clause, pre-sorted by position before splicing.
struct Clause {
    start: usize,
    end: usize,
    replacement: Option<String>,
    error: Option<String>,
}

/// Whether an import source is already a literal hex address.
fn is_literal_address(source: &str) -> bool {
    let digits = source.strip_prefix("0x").unwrap_or(source);
    digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn resolution_error(name: &str) -> String {
    format!("Cannot resolve import for {name}")
}

/// Rewrite every symbolic import in `code` that resolves through
/// `contracts`, collecting an error per clause that does not.
pub fn rewrite_imports(code: &str, contracts: &AddressMap) -> RewriteOutcome {
    let mut clauses: Vec<Clause> = Vec::new();

    for caps in QUALIFIED_IMPORT_RE.captures_iter(code) {
        let (Some(whole), Some(name), Some(source)) =
            (caps.get(0), caps.name("contract"), caps.name("source"))
        else {
            continue;
        };
        if is_literal_address(source.as_str()) {
            continue;
        }
        let (replacement, error) = match contracts.get(name.as_str()) {
            Some(address) => (
                Some(format!("import {} from 0x{address}", name.as_str())),
                None,
            ),
            None => (None, Some(resolution_error(name.as_str()))),
        };
        clauses.push(Clause {
            start: whole.start(),
            end: whole.end(),
            replacement,
            error,
        });
    }

    for caps in BARE_IMPORT_RE.captures_iter(code) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.name("contract")) else {
            continue;
        };
        let (replacement, error) = match contracts.get(name.as_str()) {
            Some(address) => (
                Some(format!("import {} from 0x{address}", name.as_str())),
                None,
            ),
            None => (None, Some(resolution_error(name.as_str()))),
        };
        clauses.push(Clause {
            start: whole.start(),
            end: whole.end(),
            replacement,
            error,
        });
    }

    clauses.sort_by_key(|c| c.start);

    let mut contents = String::with_capacity(code.len());
    let mut errors = Vec::new();
    let mut cursor = 0;
    for clause in clauses {
        // Guards against the two patterns claiming overlapping text.
        if clause.start < cursor {
            continue;
        }
        if let Some(text) = clause.replacement {
            contents.push_str(&code[cursor..clause.start]);
            contents.push_str(&text);
            cursor = clause.end;
        }
        if let Some(error) = clause.error {
            errors.push(error);
        }
    }
    contents.push_str(&code[cursor..]);

    RewriteOutcome { contents, errors }
}
