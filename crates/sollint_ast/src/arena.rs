//! Arena allocator for syntax tree nodes.

use bumpalo::Bump;

use crate::SolNode;

/// Arena allocator owning one syntax tree.
///
/// All nodes, child slices, and identifier strings for a single file are
/// allocated here and freed together when the arena drops.
#[derive(Debug, Default)]
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocates a node in the arena.
    #[inline]
    pub fn alloc<'a>(&'a self, node: SolNode<'a>) -> &'a SolNode<'a> {
        self.bump.alloc(node)
    }

    /// Allocates a child slice in the arena.
    #[inline]
    pub fn alloc_slice<'a>(&'a self, nodes: &[SolNode<'a>]) -> &'a [SolNode<'a>] {
        self.bump.alloc_slice_copy(nodes)
    }

    /// Allocates a string in the arena.
    #[inline]
    pub fn alloc_str<'a>(&'a self, value: &str) -> &'a str {
        self.bump.alloc_str(value)
    }

    /// Returns the number of bytes currently allocated.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}
