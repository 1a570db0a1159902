//! # sollint_ast
//!
//! Syntax tree types for the sollint Solidity linter.
//!
//! This crate provides the AST types shared by the parser, the lint rules,
//! and the diagnostic contract.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation: all nodes of a file live in one
//!   [`AstArena`] and are freed together
//! - Nodes are `Copy`; child lists are arena slices for reference locality
//! - Traversal is preorder (outer-first), which is what rules attributing
//!   findings to the outermost node on a line depend on
//!
//! ## Example
//!
//! ```rust
//! use sollint_ast::{AstArena, NodeKind, SolNode, Span};
//!
//! let arena = AstArena::new();
//! let node = arena.alloc(SolNode::new_parent(
//!     NodeKind::SourceUnit,
//!     Span::new(0, 100),
//!     &[],
//! ));
//! assert_eq!(node.kind, NodeKind::SourceUnit);
//! ```

mod arena;
mod node;
mod node_kind;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::SolNode;
pub use node_kind::NodeKind;
pub use span::{Location, Position, Span};

// Re-export the traversal entry point for convenience
pub use visitor::{VisitResult, walk_preorder};
