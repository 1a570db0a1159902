//! Syntactic node kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a syntax tree node.
///
/// The variant names double as the stable node-type strings surfaced in
/// diagnostics, so renaming a variant is a breaking change for report
/// consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root node covering the whole file.
    SourceUnit,
    /// `pragma solidity ...;`
    PragmaStatement,
    /// `import "...";`
    ImportStatement,
    /// `contract Name { ... }`
    ContractStatement,
    /// `library Name { ... }`
    LibraryStatement,
    /// `interface Name { ... }`
    InterfaceStatement,
    /// A `;`-terminated declaration directly inside a contract body.
    StateVariableDeclaration,
    /// `function name(...) { ... }`
    FunctionDeclaration,
    /// `modifier name(...) { ... }`
    ModifierDeclaration,
    /// A `;`-terminated statement inside a function or modifier body.
    ExpressionStatement,
}

impl NodeKind {
    /// Returns the stable node-type name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::SourceUnit => "SourceUnit",
            NodeKind::PragmaStatement => "PragmaStatement",
            NodeKind::ImportStatement => "ImportStatement",
            NodeKind::ContractStatement => "ContractStatement",
            NodeKind::LibraryStatement => "LibraryStatement",
            NodeKind::InterfaceStatement => "InterfaceStatement",
            NodeKind::StateVariableDeclaration => "StateVariableDeclaration",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ModifierDeclaration => "ModifierDeclaration",
            NodeKind::ExpressionStatement => "ExpressionStatement",
        }
    }

    /// Returns true for constructs that appear directly at file scope.
    pub const fn is_top_level(&self) -> bool {
        matches!(
            self,
            NodeKind::PragmaStatement
                | NodeKind::ImportStatement
                | NodeKind::ContractStatement
                | NodeKind::LibraryStatement
                | NodeKind::InterfaceStatement
        )
    }

    /// Returns true for statement-granularity nodes inside a body.
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::StateVariableDeclaration | NodeKind::ExpressionStatement
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_as_str_matches_serde_name() {
        let json = serde_json::to_string(&NodeKind::ContractStatement).unwrap();
        assert_eq!(json, "\"ContractStatement\"");
        assert_eq!(NodeKind::ContractStatement.as_str(), "ContractStatement");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            NodeKind::ExpressionStatement.to_string(),
            "ExpressionStatement"
        );
    }

    #[test]
    fn test_classification() {
        assert!(NodeKind::ContractStatement.is_top_level());
        assert!(NodeKind::PragmaStatement.is_top_level());
        assert!(!NodeKind::ExpressionStatement.is_top_level());

        assert!(NodeKind::ExpressionStatement.is_statement());
        assert!(NodeKind::StateVariableDeclaration.is_statement());
        assert!(!NodeKind::FunctionDeclaration.is_statement());
        assert!(!NodeKind::SourceUnit.is_statement());
    }
}
