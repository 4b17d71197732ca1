//! In-order traversal with an explicit stack.
//!
//! Memory is bounded by tree height and nothing recurses, so chain-shaped
//! trees (fresh splay trees after sequential inserts) walk safely.

use std::iter::FusedIterator;

use crate::types::Node;

use super::{get_l, get_r};

/// Ascending walk yielding node indices.
#[derive(Clone, Debug)]
pub struct InOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N: Node> InOrder<'a, N> {
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = get_l(self.arena, i);
        }
    }
}

impl<N: Node> Iterator for InOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        self.push_left(get_r(self.arena, i));
        Some(i)
    }
}

impl<N: Node> FusedIterator for InOrder<'_, N> {}
