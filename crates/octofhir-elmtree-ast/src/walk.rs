//! Pre-order tree walking
//!
//! A walk holds its own stack of pending nodes and never touches the tree,
//! so any number of walks can run over the same root at once and each fresh
//! call yields the same sequence.

use crate::Node;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Pending nodes kept inline before spilling to the heap
const INLINE_STACK: usize = 16;

/// Walk every node reachable from `root`, each node before its children
pub fn walk(root: &Node) -> Walk<'_> {
    let mut stack = SmallVec::new();
    stack.push(root);
    Walk { stack }
}

/// Like [`walk`], pairing each node with its depth below `root` (root is 0)
pub fn walk_with_depth(root: &Node) -> WalkWithDepth<'_> {
    let mut stack = SmallVec::new();
    stack.push((0, root));
    WalkWithDepth { stack }
}

/// Lazy pre-order iterator over a tree
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: SmallVec<[&'a Node; INLINE_STACK]>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children().rev());
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl FusedIterator for Walk<'_> {}

/// Lazy pre-order iterator yielding `(depth, node)` pairs
#[derive(Debug, Clone)]
pub struct WalkWithDepth<'a> {
    stack: SmallVec<[(usize, &'a Node); INLINE_STACK]>,
}

impl<'a> Iterator for WalkWithDepth<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl FusedIterator for WalkWithDepth<'_> {}
