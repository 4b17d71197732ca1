use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::error::InvariantError;
use crate::trace::debug_log;
use crate::types::{Comparator, KvNode};
use crate::util::{self, attach, first, last, locate, release, Descent, InOrder};

/// Strategy callbacks required by [`ForestMap`].
///
/// Every public map operation first runs the shared descent, then hands
/// structural repair to these hooks.
pub trait Balancer<K, V> {
    type Node: KvNode<K, V>;

    fn new_node(key: K, value: V) -> Self::Node;

    /// Repairs the tree after `node` was attached as a leaf.
    fn fix_insert(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> Option<u32>;

    /// Called with the located node on a hit, or the last visited node on a
    /// miss. Only self-adjusting strategies restructure here.
    fn touch(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> Option<u32> {
        let _ = (arena, node);
        root
    }

    /// Unlinks the node holding the key to delete and repairs the tree.
    /// Returns the new root and the index of the now unlinked node, which
    /// carries the removed entry.
    fn remove(arena: &mut [Self::Node], root: Option<u32>, node: u32) -> (Option<u32>, u32);

    /// Checks the strategy's own structural invariant.
    fn validate(arena: &[Self::Node], root: Option<u32>) -> Result<(), InvariantError>;
}

/// Arena-backed ordered map over a pluggable balancing strategy.
///
/// Keys are ordered by the comparator given at construction. The arena is
/// dense, so the live count is the arena length.
pub struct ForestMap<K, V, B, C = Comparator<K>>
where
    B: Balancer<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    arena: Vec<B::Node>,
    root: Option<u32>,
    comparator: C,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<B>,
}

impl<K, V, B, C> ForestMap<K, V, B, C>
where
    B: Balancer<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity(0, comparator)
    }

    /// Pre-allocates room for `capacity` nodes.
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            root: None,
            comparator,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[B::Node] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn locate(&self, key: &K) -> Descent {
        locate::<K, V, _, _>(&self.arena, self.root, key, &self.comparator)
    }

    /// Descends for `key` and lets the strategy react to the access.
    fn access(&mut self, key: &K) -> Option<u32> {
        match self.locate(key) {
            Descent::Found(i) => {
                self.root = B::touch(&mut self.arena, self.root, i);
                Some(i)
            }
            Descent::Vacant { parent, .. } => {
                if let Some(p) = parent {
                    self.root = B::touch(&mut self.arena, self.root, p);
                }
                None
            }
        }
    }

    /// Inserts or overwrites. Returns `true` when `key` was not present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.locate(&key) {
            Descent::Found(i) => {
                self.arena[i as usize].set_value(value);
                self.root = B::touch(&mut self.arena, self.root, i);
                false
            }
            Descent::Vacant { parent, side } => {
                let idx = self.arena.len() as u32;
                self.arena.push(B::new_node(key, value));
                self.root = attach(&mut self.arena, self.root, idx, parent, side);
                self.root = B::fix_insert(&mut self.arena, self.root, idx);
                debug_log!(idx, len = self.arena.len(), "inserted");
                true
            }
        }
    }

    /// Looks `key` up. Self-adjusting strategies restructure on every call,
    /// hit or miss.
    pub fn find(&mut self, key: &K) -> Option<&V> {
        let idx = self.access(key)?;
        Some(self.arena[idx as usize].value())
    }

    /// Mutable lookup with the same restructuring as [`Self::find`].
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.access(key)?;
        Some(self.arena[idx as usize].value_mut())
    }

    /// Read-only lookup that never restructures.
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.locate(key) {
            Descent::Found(i) => Some(self.arena[i as usize].value()),
            Descent::Vacant { .. } => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        matches!(self.locate(key), Descent::Found(_))
    }

    /// Removes `key`. Returns `true` when it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` and hands back the owned entry.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let node = match self.locate(key) {
            Descent::Found(i) => i,
            Descent::Vacant { parent, .. } => {
                if let Some(p) = parent {
                    self.root = B::touch(&mut self.arena, self.root, p);
                }
                return None;
            }
        };

        let (root, unlinked) = B::remove(&mut self.arena, self.root, node);
        let (root, removed) = release(&mut self.arena, root, unlinked);
        self.root = root;
        debug_log!(unlinked, len = self.arena.len(), "removed");
        Some(removed.into_entry())
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        first(&self.arena, self.root).map(|i| self.entry(i))
    }

    /// Entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        last(&self.arena, self.root).map(|i| self.entry(i))
    }

    fn entry(&self, idx: u32) -> (&K, &V) {
        let n = &self.arena[idx as usize];
        (n.key(), n.value())
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V, B::Node> {
        Iter {
            arena: &self.arena,
            inner: InOrder::new(&self.arena, self.root),
            remaining: self.arena.len(),
            _kv: PhantomData,
        }
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Checks links, order, live count and the strategy invariant.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        let reachable =
            util::assert_links_and_order::<K, V, _, _>(&self.arena, self.root, &self.comparator)?;
        if reachable != self.arena.len() {
            return Err(InvariantError::CountMismatch {
                expected: self.arena.len(),
                actual: reachable,
            });
        }
        B::validate(&self.arena, self.root)
    }
}

/// Ascending `(key, value)` iterator over a [`ForestMap`].
pub struct Iter<'a, K, V, N> {
    arena: &'a [N],
    inner: InOrder<'a, N>,
    remaining: usize,
    _kv: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V, N> Iterator for Iter<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.inner.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        let arena = self.arena;
        let n = &arena[i as usize];
        Some((n.key(), n.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, N: KvNode<K, V>> ExactSizeIterator for Iter<'_, K, V, N> {}

impl<K, V, N: KvNode<K, V>> FusedIterator for Iter<'_, K, V, N> {}

impl<'a, K, V, B, C> IntoIterator for &'a ForestMap<K, V, B, C>
where
    B: Balancer<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, B::Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
