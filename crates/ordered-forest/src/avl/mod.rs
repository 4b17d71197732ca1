//! Height-balanced (AVL) strategy.

pub mod types;
pub mod util;

pub use types::AvlNode;
pub use util::{assert_avl_tree, fix_insert, fix_remove, remove};

use crate::data_types::{Balancer, ForestMap};
use crate::error::InvariantError;
use crate::types::Comparator;

/// AVL strategy marker for [`ForestMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AvlOps;

impl<K, V> Balancer<K, V> for AvlOps {
    type Node = AvlNode<K, V>;

    fn new_node(key: K, value: V) -> Self::Node {
        AvlNode::new(key, value)
    }

    fn fix_insert(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> Option<u32> {
        util::fix_insert(arena, root, node)
    }

    fn remove(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> (Option<u32>, u32) {
        util::remove(arena, root, node)
    }

    fn validate(arena: &[Self::Node], root: Option<u32>) -> Result<(), InvariantError> {
        util::assert_avl_tree(arena, root)
    }
}

/// Ordered map balanced as an AVL tree.
pub type AvlMap<K, V, C = Comparator<K>> = ForestMap<K, V, AvlOps, C>;
