//! Arena-based ordered maps over three self-balancing binary search trees.
//!
//! Every map exposes the same contract (insert, find, remove, len, ordered
//! iteration) over a caller-supplied comparator, and differs only in how it
//! repairs the tree after a mutation:
//!
//! - **AVL** ([`AvlMap`]): integer balance factor per node.
//! - **Red-black** ([`RbMap`]): two-color invariant with a reserved sentinel
//!   handle standing in for absent children.
//! - **Splay** ([`SplayMap`]): no stored invariant; every access lifts the
//!   touched node to the root.
//!
//! Nodes live in a `Vec` arena and link to each other by `u32` index, so
//! parent back-references carry no ownership. Descent, traversal and every
//! fix-up walk are iterative.
//!
//! ```
//! use ordered_forest::RbMap;
//!
//! let mut map = RbMap::with_comparator(|a: &i32, b: &i32| a.cmp(b));
//! assert!(map.insert(5, "b"));
//! assert!(map.insert(10, "c"));
//! assert!(!map.insert(5, "d"));
//! assert_eq!(map.find(&5), Some(&"d"));
//! assert_eq!(map.len(), 2);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`KvNode`] traits, [`Side`] |
//! | [`util`] | descent, attach/detach, successor, rotation, in-order walk |
//! | [`avl`] | AVL fix-ups and [`AvlMap`] |
//! | [`red_black`] | red-black fix-ups and [`RbMap`] |
//! | [`splay`] | splay step and [`SplayMap`] |
//! | [`data_types`] | [`ForestMap`] shell, [`Balancer`] trait, [`AnyMap`] |
//! | [`config`] | [`Strategy`] and [`MapConfig`] |
//! | [`error`] | [`InvariantError`] and [`ParseStrategyError`] |

mod trace;

pub mod avl;
pub mod config;
pub mod data_types;
pub mod error;
pub mod red_black;
pub mod splay;
pub mod types;
pub mod util;

pub use avl::{AvlMap, AvlOps};
pub use config::{MapConfig, Strategy};
pub use data_types::{AnyIter, AnyMap, Balancer, ForestMap, Iter};
pub use error::{InvariantError, ParseStrategyError};
pub use red_black::{RbMap, RbOps};
pub use splay::{SplayMap, SplayOps};
pub use types::{Comparator, KvNode, Node, Side};
