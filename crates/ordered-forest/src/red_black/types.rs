use crate::types::{KvNode, Node};

/// Reserved handle standing for "no node".
///
/// It never addresses arena storage, so it cannot be written through; its
/// color is always [`Color::Black`].
pub const NIL: u32 = u32::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Red-black tree node. Absent links hold [`NIL`].
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub p: u32,
    pub l: u32,
    pub r: u32,
    pub k: K,
    pub v: V,
    pub color: Color,
}

impl<K, V> RbNode<K, V> {
    /// New nodes start red.
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: NIL,
            l: NIL,
            r: NIL,
            k,
            v,
            color: Color::Red,
        }
    }
}

#[inline]
fn link(v: u32) -> Option<u32> {
    (v != NIL).then_some(v)
}

impl<K, V> Node for RbNode<K, V> {
    fn p(&self) -> Option<u32> {
        link(self.p)
    }

    fn l(&self) -> Option<u32> {
        link(self.l)
    }

    fn r(&self) -> Option<u32> {
        link(self.r)
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v.unwrap_or(NIL);
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v.unwrap_or(NIL);
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v.unwrap_or(NIL);
    }
}

impl<K, V> KvNode<K, V> for RbNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn set_value(&mut self, value: V) {
        self.v = value;
    }

    fn entry_mut(&mut self) -> (&mut K, &mut V) {
        (&mut self.k, &mut self.v)
    }

    fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}
