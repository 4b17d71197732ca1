//! Map shells wiring descent, rotation and one balancer together.

pub mod any;
pub mod map;

pub use any::{AnyIter, AnyMap};
pub use map::{Balancer, ForestMap, Iter};
