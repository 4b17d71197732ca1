use std::cmp::Ordering;

use crate::avl::{AvlMap, AvlNode};
use crate::config::{MapConfig, Strategy};
use crate::error::InvariantError;
use crate::red_black::{RbMap, RbNode};
use crate::splay::{SplayMap, SplayNode};
use crate::types::Comparator;

use super::map::Iter;

/// Ordered map whose balancing strategy is picked at runtime.
pub enum AnyMap<K, V, C = Comparator<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    Avl(AvlMap<K, V, C>),
    RedBlack(RbMap<K, V, C>),
    Splay(SplayMap<K, V, C>),
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyMap::Avl($m) => $body,
            AnyMap::RedBlack($m) => $body,
            AnyMap::Splay($m) => $body,
        }
    };
}

impl<K, V, C> AnyMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn new(strategy: Strategy, comparator: C) -> Self {
        Self::with_config(&MapConfig::default().with_strategy(strategy), comparator)
    }

    pub fn with_config(config: &MapConfig, comparator: C) -> Self {
        let capacity = config.capacity;
        match config.strategy {
            Strategy::Avl => AnyMap::Avl(AvlMap::with_capacity(capacity, comparator)),
            Strategy::RedBlack => AnyMap::RedBlack(RbMap::with_capacity(capacity, comparator)),
            Strategy::Splay => AnyMap::Splay(SplayMap::with_capacity(capacity, comparator)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            AnyMap::Avl(_) => Strategy::Avl,
            AnyMap::RedBlack(_) => Strategy::RedBlack,
            AnyMap::Splay(_) => Strategy::Splay,
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> bool {
        dispatch!(self, m => m.insert(key, value))
    }

    pub fn find(&mut self, key: &K) -> Option<&V> {
        dispatch!(self, m => m.find(key))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        dispatch!(self, m => m.get_mut(key))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        dispatch!(self, m => m.get(key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        dispatch!(self, m => m.contains_key(key))
    }

    pub fn remove(&mut self, key: &K) -> bool {
        dispatch!(self, m => m.remove(key))
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        dispatch!(self, m => m.remove_entry(key))
    }

    pub fn len(&self) -> usize {
        dispatch!(self, m => m.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, m => m.is_empty())
    }

    pub fn clear(&mut self) {
        dispatch!(self, m => m.clear())
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        dispatch!(self, m => m.first())
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        dispatch!(self, m => m.last())
    }

    pub fn iter(&self) -> AnyIter<'_, K, V> {
        match self {
            AnyMap::Avl(m) => AnyIter::Avl(m.iter()),
            AnyMap::RedBlack(m) => AnyIter::RedBlack(m.iter()),
            AnyMap::Splay(m) => AnyIter::Splay(m.iter()),
        }
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        dispatch!(self, m => m.assert_valid())
    }
}

/// Ascending iterator over an [`AnyMap`].
pub enum AnyIter<'a, K, V> {
    Avl(Iter<'a, K, V, AvlNode<K, V>>),
    RedBlack(Iter<'a, K, V, RbNode<K, V>>),
    Splay(Iter<'a, K, V, SplayNode<K, V>>),
}

impl<'a, K, V> Iterator for AnyIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AnyIter::Avl(it) => it.next(),
            AnyIter::RedBlack(it) => it.next(),
            AnyIter::Splay(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            AnyIter::Avl(it) => it.size_hint(),
            AnyIter::RedBlack(it) => it.size_hint(),
            AnyIter::Splay(it) => it.size_hint(),
        }
    }
}

impl<K, V> ExactSizeIterator for AnyIter<'_, K, V> {}

impl<'a, K, V, C> IntoIterator for &'a AnyMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = AnyIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
