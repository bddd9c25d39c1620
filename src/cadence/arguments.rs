//! Parameter Extraction
//!
//! Pulls the ordered argument list a caller must supply out of a parsed
//! transaction or script. Classification upstream is a cheap textual
//! heuristic, so the script path re-checks the parser's structural view:
//! anything other than exactly one top-level function yields an empty
//! list. Zero or multiple transaction declarations likewise yield an
//! empty list without being an error.

use super::parser::{DeclarationParser, ParseFailure};
use crate::types::Argument;

/// Which declaration shape to extract from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationRole {
    Transaction,
    Script,
}

/// Extract the declared parameters for `role` from `code`.
///
/// A parse failure is returned to the caller to attach to the owning
/// file; it never aborts the surrounding request.
pub fn extract_arguments(
    parser: &dyn DeclarationParser,
    code: &str,
    role: DeclarationRole,
) -> Result<Vec<Argument>, ParseFailure> {
    let program = parser.parse(code)?;

    let parameters = match role {
        DeclarationRole::Transaction => program
            .sole_transaction_declaration()
            .map(|declaration| declaration.parameters.as_slice())
            .unwrap_or_default(),
        DeclarationRole::Script => match program.function_declarations() {
            [sole] => sole.parameters.as_slice(),
            _ => &[],
        },
    };

    Ok(parameters
        .iter()
        .map(|parameter| Argument {
            name: parameter.name.clone(),
            ty: parameter.type_annotation.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cadence::parser::CadenceFrontend;

    const FRONTEND: CadenceFrontend = CadenceFrontend;

    #[test]
    fn test_script_arguments() {
        let code = "pub fun main(code: String): String {\n  return code\n}\n";
        let arguments = extract_arguments(&FRONTEND, code, DeclarationRole::Script).unwrap();
        assert_eq!(
            arguments,
            vec![Argument {
                name: "code".to_string(),
                ty: "String".to_string(),
            }]
        );
    }

    #[test]
    fn test_transaction_arguments() {
        let code = "transaction(amount: UFix64, to: Address) {\n  execute {}\n}\n";
        let arguments = extract_arguments(&FRONTEND, code, DeclarationRole::Transaction).unwrap();
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[0].name, "amount");
        assert_eq!(arguments[1].ty, "Address");
    }

    #[test]
    fn test_transaction_without_parameters_is_empty() {
        let code = "transaction {\n  execute {}\n}\n";
        let arguments = extract_arguments(&FRONTEND, code, DeclarationRole::Transaction).unwrap();
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_multiple_transactions_yield_empty_list() {
        let code = "transaction(a: Int) {\n}\ntransaction(b: Int) {\n}\n";
        let arguments = extract_arguments(&FRONTEND, code, DeclarationRole::Transaction).unwrap();
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_script_recheck_rejects_multiple_functions() {
        // Classified as a script by pattern, structurally two functions.
        let code = "pub fun helper(): Int { return 1 }\npub fun main(x: Int): Int { return x }\n";
        let arguments = extract_arguments(&FRONTEND, code, DeclarationRole::Script).unwrap();
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_parse_failure_propagates() {
        let result = extract_arguments(&FRONTEND, "transaction {\n", DeclarationRole::Transaction);
        assert!(result.is_err());
    }
}
