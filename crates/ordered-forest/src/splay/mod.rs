//! Self-adjusting (splay) strategy.
//!
//! No shape invariant is stored. Every access ends by lifting the touched
//! node to the root with zig / zig-zig / zig-zag steps:
//!
//! ```text
//!   zig-zig (grandparent first)      zig-zag
//!
//!       g           x                  g            x
//!      /           / \                /            / \
//!     p     →     a   p              p      →     p   g
//!    /                 \              \
//!   x                   g              x
//! ```

pub mod types;

pub use types::SplayNode;

use crate::data_types::{Balancer, ForestMap};
use crate::error::InvariantError;
use crate::trace::trace_log;
use crate::types::{Comparator, Node};
use crate::util::{detach, get_p, rotate, side_of};

/// Lifts `node` to the root. Returns the new root.
pub fn splay<N: Node>(arena: &mut [N], mut root: Option<u32>, node: u32) -> Option<u32> {
    while let Some(p) = get_p(arena, node) {
        let side = side_of(arena, p, node);
        match get_p(arena, p) {
            None => {
                root = rotate(arena, root, p, side.opposite());
            }
            Some(g) => {
                let pside = side_of(arena, g, p);
                if pside == side {
                    root = rotate(arena, root, g, side.opposite());
                    root = rotate(arena, root, p, side.opposite());
                } else {
                    root = rotate(arena, root, p, side.opposite());
                    root = rotate(arena, root, g, pside.opposite());
                }
            }
        }
    }
    trace_log!(node, "splayed");
    root
}

/// Splays `node`'s parent to the root, then unlinks `node` (via its
/// successor when it has two children). Returns the new root and the index
/// holding the removed entry.
pub fn remove<K, V>(arena: &mut [SplayNode<K, V>], mut root: Option<u32>, node: u32) -> (Option<u32>, u32) {
    if let Some(p) = get_p(arena, node) {
        root = splay(arena, root, p);
    }
    let d = detach::<K, V, _>(arena, root, node);
    (d.root, d.node)
}

/// Splay trees keep no shape invariant beyond links and order, which the
/// map checks for every strategy.
pub fn assert_splay_tree<K, V>(_arena: &[SplayNode<K, V>], _root: Option<u32>) -> Result<(), InvariantError> {
    Ok(())
}

/// Splay strategy marker for [`ForestMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SplayOps;

impl<K, V> Balancer<K, V> for SplayOps {
    type Node = SplayNode<K, V>;

    fn new_node(key: K, value: V) -> Self::Node {
        SplayNode::new(key, value)
    }

    fn fix_insert(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> Option<u32> {
        splay(arena, root, node)
    }

    fn touch(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> Option<u32> {
        splay(arena, root, node)
    }

    fn remove(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> (Option<u32>, u32) {
        remove(arena, root, node)
    }

    fn validate(arena: &[Self::Node], root: Option<u32>) -> Result<(), InvariantError> {
        assert_splay_tree(arena, root)
    }
}

/// Ordered map kept as a splay tree.
pub type SplayMap<K, V, C = Comparator<K>> = ForestMap<K, V, SplayOps, C>;
