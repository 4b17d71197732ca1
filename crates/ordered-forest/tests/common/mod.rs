//! Shared test helpers.
//!
//! `RUST_LOG` filters log output when the crate is built with `--features tracing`:
//!
//! ```bash
//! RUST_LOG=ordered_forest=trace cargo test --features tracing -- --nocapture
//! ```

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::BTreeMap;

use ordered_forest::{Balancer, ForestMap, KvNode};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn cmp_i32(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Keys of the root and its two children.
pub fn shape_of<K, V, N>(arena: &[N], root: Option<u32>) -> (Option<K>, Option<K>, Option<K>)
where
    K: Clone,
    N: KvNode<K, V>,
{
    let key = |i: Option<u32>| i.map(|i| arena[i as usize].key().clone());
    match root {
        None => (None, None, None),
        Some(r) => {
            let n = &arena[r as usize];
            (key(Some(r)), key(n.l()), key(n.r()))
        }
    }
}

/// Key stored at the root.
pub fn root_key<K, V, N>(arena: &[N], root: Option<u32>) -> Option<K>
where
    K: Clone,
    N: KvNode<K, V>,
{
    root.map(|r| arena[r as usize].key().clone())
}

/// Height measured with an explicit stack.
pub fn height<N: ordered_forest::Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        let n = &arena[i as usize];
        for c in [n.l(), n.r()].into_iter().flatten() {
            stack.push((c, depth + 1));
        }
    }
    max
}

/// Reproducible source of random map operations.
pub struct Fuzzer {
    rng: Xoshiro256StarStar,
}

#[derive(Clone, Copy, Debug)]
pub enum Op {
    Insert(i32, i32),
    Find(i32),
    Remove(i32),
}

impl Fuzzer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    /// Weighted towards inserts so the tree keeps growing.
    pub fn op(&mut self, key_space: i32) -> Op {
        let key = self.random_int(0, key_space);
        match self.rng.gen_range(0..10) {
            0..=4 => Op::Insert(key, self.rng.gen()),
            5..=6 => Op::Find(key),
            _ => Op::Remove(key),
        }
    }
}

/// Applies `op` to both `map` and the `BTreeMap` oracle and compares results.
pub fn apply_and_compare<B, C>(
    map: &mut ForestMap<i32, i32, B, C>,
    oracle: &mut BTreeMap<i32, i32>,
    op: Op,
) where
    B: Balancer<i32, i32>,
    C: Fn(&i32, &i32) -> Ordering,
{
    match op {
        Op::Insert(k, v) => {
            assert_eq!(map.insert(k, v), oracle.insert(k, v).is_none(), "{op:?}");
        }
        Op::Find(k) => {
            assert_eq!(map.find(&k), oracle.get(&k), "{op:?}");
        }
        Op::Remove(k) => {
            assert_eq!(map.remove(&k), oracle.remove(&k).is_some(), "{op:?}");
        }
    }
    assert_eq!(map.len(), oracle.len());
}

/// Full content comparison against the oracle.
pub fn assert_same_entries<B, C>(map: &ForestMap<i32, i32, B, C>, oracle: &BTreeMap<i32, i32>)
where
    B: Balancer<i32, i32>,
    C: Fn(&i32, &i32) -> Ordering,
{
    let got: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let want: Vec<(i32, i32)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(got, want);
}
