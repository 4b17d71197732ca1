//! Node trait definitions.
//!
//! Nodes live in a `Vec<N>` arena owned by the tree. Every "pointer" is a
//! `u32` index into that arena, so the cyclic child/parent relationship is
//! plain data. All tree-manipulation functions take the arena plus node
//! indices and return the (possibly new) root index.

use std::cmp::Ordering;

/// Binary-tree links (`p`, `l`, `r`).
///
/// The parent link is a back-reference used for upward fix-up walks and
/// rotation bookkeeping; ownership is expressed by the arena alone.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value payload carried by a tree node.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);
    /// Both payload halves at once, for moving a successor's entry.
    fn entry_mut(&mut self) -> (&mut K, &mut V);
    fn into_entry(self) -> (K, V);
}

/// Caller-supplied three-way comparison on keys.
///
/// Must be a strict total order; anything else leaves tree structure
/// unspecified.
pub type Comparator<K> = fn(&K, &K) -> Ordering;

/// Which child slot of a parent a node occupies (or would occupy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Side a key descends to given its comparison with the node's key.
    /// `Equal` never reaches here during descent.
    pub fn of(ord: Ordering) -> Self {
        if ord == Ordering::Less {
            Side::Left
        } else {
            Side::Right
        }
    }
}
