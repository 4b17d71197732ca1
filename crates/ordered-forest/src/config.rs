//! Map construction settings.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;

/// Balancing strategy behind an [`AnyMap`](crate::AnyMap).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    /// Height-balanced.
    #[default]
    Avl,
    /// Color-balanced.
    RedBlack,
    /// Self-adjusting.
    Splay,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Avl, Strategy::RedBlack, Strategy::Splay];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Avl => "avl",
            Strategy::RedBlack => "red-black",
            Strategy::Splay => "splay",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avl" => Ok(Strategy::Avl),
            "red-black" | "red_black" | "redblack" | "rb" => Ok(Strategy::RedBlack),
            "splay" => Ok(Strategy::Splay),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Settings for building a map at runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MapConfig {
    pub strategy: Strategy,
    /// Nodes to pre-allocate in the arena.
    pub capacity: usize,
}

impl MapConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
