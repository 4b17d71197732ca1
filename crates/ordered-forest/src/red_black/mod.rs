//! Color-balanced (red-black) strategy.

pub mod types;
pub mod util;

pub use types::{Color, RbNode, NIL};
pub use util::{assert_red_black_tree, fix_insert, fix_remove, remove};

use crate::data_types::{Balancer, ForestMap};
use crate::error::InvariantError;
use crate::types::Comparator;

/// Red-black strategy marker for [`ForestMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RbOps;

impl<K, V> Balancer<K, V> for RbOps {
    type Node = RbNode<K, V>;

    fn new_node(key: K, value: V) -> Self::Node {
        RbNode::new(key, value)
    }

    fn fix_insert(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> Option<u32> {
        util::fix_insert(arena, root, node)
    }

    fn remove(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> (Option<u32>, u32) {
        util::remove(arena, root, node)
    }

    fn validate(arena: &[Self::Node], root: Option<u32>) -> Result<(), InvariantError> {
        util::assert_red_black_tree(arena, root)
    }
}

/// Ordered map balanced as a red-black tree.
pub type RbMap<K, V, C = Comparator<K>> = ForestMap<K, V, RbOps, C>;
