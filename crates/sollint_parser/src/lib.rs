//! # sollint_parser
//!
//! Parser abstraction layer for sollint.
//!
//! This crate provides:
//! - A `Parser` trait the lint engine is generic over
//! - A built-in structural parser for Solidity contract files
//!
//! ## Architecture
//!
//! Parsers convert source text into `SolNode` trees allocated in an
//! `AstArena`. The trait is the boundary between the linter core and
//! whatever front end produced the tree; the built-in parser recovers
//! statement-granularity structure, which is all the line-oriented rules
//! need.
//!
//! ## Example
//!
//! ```rust
//! use sollint_parser::{ContractParser, Parser};
//! use sollint_ast::AstArena;
//!
//! let arena = AstArena::new();
//! let parser = ContractParser::new();
//! let source = "pragma solidity ^0.4.3;\ncontract Token {}";
//!
//! let ast = parser.parse(&arena, source).unwrap();
//! assert_eq!(ast.children.len(), 2);
//! ```

mod contract;
mod error;
mod traits;

pub use contract::ContractParser;
pub use error::ParseError;
pub use traits::Parser;
