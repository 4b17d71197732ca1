//! Error types.
//!
//! Missing and duplicate keys are ordinary outcomes reported through `bool`
//! and `Option` results; the types here cover structural diagnostics and
//! configuration parsing only.

use thiserror::Error;

/// A violated structural property found by `assert_valid`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root {0} has a parent")]
    RootHasParent(u32),
    #[error("broken parent link between {parent} and child {child}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("node order violated at {0}")]
    OrderViolated(u32),
    #[error("live count mismatch: expected {expected}, reachable {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("balance factor mismatch at {node}: stored {stored}, actual {actual}")]
    BalanceMismatch { node: u32, stored: i8, actual: i64 },
    #[error("AVL balance violated at {0}")]
    Unbalanced(u32),
    #[error("root {0} is not black")]
    RedRoot(u32),
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch below {0}")]
    BlackHeightMismatch(u32),
}

/// Unknown strategy name given to `Strategy::from_str`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tree strategy `{0}` (expected avl, red-black or splay)")]
pub struct ParseStrategyError(pub String);
