//! Syntax tree node definition.

use crate::{NodeKind, Span};

/// A node in the Solidity syntax tree.
///
/// Nodes are allocated in an arena and are `Copy`; child lists are arena
/// slices, so a whole tree is freed at once when its [`AstArena`] drops.
///
/// # Lifetime
///
/// The `'a` lifetime ties the node to its arena allocator, ensuring child
/// references and names remain valid for the life of the tree.
///
/// # Example
///
/// ```rust
/// use sollint_ast::{AstArena, NodeKind, SolNode, Span};
///
/// let arena = AstArena::new();
/// let stmt = SolNode::new(NodeKind::ExpressionStatement, Span::new(17, 28));
/// let children = arena.alloc_slice(&[stmt]);
/// let contract = SolNode::new_parent(NodeKind::ContractStatement, Span::new(0, 30), children);
/// assert_eq!(contract.children.len(), 1);
/// ```
///
/// [`AstArena`]: crate::AstArena
#[derive(Debug, Clone, Copy)]
pub struct SolNode<'a> {
    /// The kind of this node.
    pub kind: NodeKind,

    /// Byte span in the source text.
    pub span: Span,

    /// Declared name, for named constructs (contracts, functions, ...).
    pub name: Option<&'a str>,

    /// Child nodes, in source order.
    pub children: &'a [SolNode<'a>],
}

impl<'a> SolNode<'a> {
    /// Creates a new leaf node.
    #[inline]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            name: None,
            children: &[],
        }
    }

    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(kind: NodeKind, span: Span, children: &'a [SolNode<'a>]) -> Self {
        Self {
            kind,
            span,
            name: None,
            children,
        }
    }

    /// Attaches a declared name.
    #[inline]
    pub const fn named(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Returns true if this node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AstArena;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_node() {
        let node = SolNode::new(NodeKind::PragmaStatement, Span::new(0, 23));
        assert!(node.is_leaf());
        assert_eq!(node.name, None);
        assert_eq!(node.span.len(), 23);
    }

    #[test]
    fn test_parent_node_with_name() {
        let arena = AstArena::new();
        let stmt = SolNode::new(NodeKind::StateVariableDeclaration, Span::new(20, 30));
        let children = arena.alloc_slice(&[stmt]);
        let contract = SolNode::new_parent(NodeKind::ContractStatement, Span::new(0, 32), children)
            .named(arena.alloc_str("Token"));

        assert!(!contract.is_leaf());
        assert_eq!(contract.name, Some("Token"));
        assert_eq!(contract.children[0].kind, NodeKind::StateVariableDeclaration);
    }
}
