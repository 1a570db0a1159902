//! Preorder traversal for syntax trees.
//!
//! Traversal is outer-first: a parent is always visited before any of its
//! children, and siblings are visited in source order. Rules that resolve
//! "outermost node first" questions rely on this ordering.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use sollint_ast::{AstArena, NodeKind, SolNode, Span};
//! use sollint_ast::visitor::walk_preorder;
//!
//! let arena = AstArena::new();
//! let stmt = SolNode::new(NodeKind::ExpressionStatement, Span::new(17, 28));
//! let children = arena.alloc_slice(&[stmt]);
//! let root = SolNode::new_parent(NodeKind::SourceUnit, Span::new(0, 30), children);
//!
//! let mut kinds = Vec::new();
//! let _ = walk_preorder(&root, &mut |node| {
//!     kinds.push(node.kind);
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(kinds, vec![NodeKind::SourceUnit, NodeKind::ExpressionStatement]);
//! ```

use std::ops::ControlFlow;

use crate::SolNode;

/// Result of visiting a node: continue into the rest of the tree or stop.
pub type VisitResult = ControlFlow<()>;

/// Walks `node` and all descendants in preorder, stopping early if the
/// visitor breaks.
pub fn walk_preorder<'a, F>(node: &SolNode<'a>, visit: &mut F) -> VisitResult
where
    F: FnMut(&SolNode<'a>) -> VisitResult,
{
    visit(node)?;
    for child in node.children {
        walk_preorder(child, visit)?;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, NodeKind, Span};
    use pretty_assertions::assert_eq;

    fn sample_tree(arena: &AstArena) -> SolNode<'_> {
        let stmt1 = SolNode::new(NodeKind::ExpressionStatement, Span::new(40, 51));
        let stmt2 = SolNode::new(NodeKind::ExpressionStatement, Span::new(51, 62));
        let body = arena.alloc_slice(&[stmt1, stmt2]);
        let func = SolNode::new_parent(NodeKind::FunctionDeclaration, Span::new(20, 70), body);
        let contract_children = arena.alloc_slice(&[func]);
        let contract = SolNode::new_parent(
            NodeKind::ContractStatement,
            Span::new(0, 72),
            contract_children,
        );
        let top = arena.alloc_slice(&[contract]);
        SolNode::new_parent(NodeKind::SourceUnit, Span::new(0, 72), top)
    }

    #[test]
    fn test_preorder_is_outer_first() {
        let arena = AstArena::new();
        let root = sample_tree(&arena);

        let mut kinds = Vec::new();
        let _ = walk_preorder(&root, &mut |node| {
            kinds.push(node.kind);
            ControlFlow::Continue(())
        });

        assert_eq!(
            kinds,
            vec![
                NodeKind::SourceUnit,
                NodeKind::ContractStatement,
                NodeKind::FunctionDeclaration,
                NodeKind::ExpressionStatement,
                NodeKind::ExpressionStatement,
            ]
        );
    }

    #[test]
    fn test_early_exit() {
        let arena = AstArena::new();
        let root = sample_tree(&arena);

        let mut visited = 0;
        let result = walk_preorder(&root, &mut |node| {
            visited += 1;
            if node.kind == NodeKind::FunctionDeclaration {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(result, ControlFlow::Break(()));
        assert_eq!(visited, 3);
    }
}
