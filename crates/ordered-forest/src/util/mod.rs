//! Shared tree primitives.
//!
//! Strategy-independent pieces every balancer is built from:
//! - [`locate`]: iterative descent to a key or its insertion point
//! - [`attach`] / [`detach`]: leaf linking and the two-children reduction
//! - [`successor`], [`first`], [`last`], [`next`], [`prev`]
//! - [`rotate`]: the rotation primitive
//! - [`iter`]: explicit-stack in-order traversal
//! - [`arena`]: dense slot reclamation

pub mod arena;
pub mod iter;
pub mod rotate;

use std::cmp::Ordering;

use crate::error::InvariantError;
use crate::types::{KvNode, Node, Side};

pub use arena::{release, swap_payload};
pub use iter::InOrder;
pub use rotate::{rotate, rotate_left, rotate_right};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Child of `idx` on `side`.
#[inline]
pub fn child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut [N], idx: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => set_l(arena, idx, v),
        Side::Right => set_r(arena, idx, v),
    }
}

/// Which side of `parent` holds `node`.
#[inline]
pub fn side_of<N: Node>(arena: &[N], parent: u32, node: u32) -> Side {
    if get_l(arena, parent) == Some(node) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Hangs `new` where `old` used to hang under `parent`, or in the root slot
/// when `parent` is `None`. Returns the new root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    if let Some(n) = new {
        set_p(arena, n, parent);
    }
    match parent {
        Some(p) => {
            let side = side_of(arena, p, old);
            set_child(arena, p, side, new);
            root
        }
        None => new,
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// Node holding the smallest key greater than `node`'s, looked up inside
/// `node`'s right subtree only. `None` when there is no right child.
pub fn successor<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    first(arena, get_r(arena, node))
}

/// In-order successor anywhere in the tree, climbing parent links when the
/// right subtree is empty.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(s) = successor(arena, curr) {
        return Some(s);
    }
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    while let Some(p) = get_p(arena, curr) {
        if get_r(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Result of descending the tree for a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Descent {
    /// Node holding an equal key.
    Found(u32),
    /// Key is absent. `parent` is the last node visited (`None` for an empty
    /// tree) and `side` is where the key would attach under it.
    Vacant { parent: Option<u32>, side: Side },
}

/// Iterative descent from `root` comparing with `comparator`.
pub fn locate<K, V, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Descent
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut parent = None;
    let mut side = Side::Left;
    let mut curr = root;
    while let Some(i) = curr {
        let ord = comparator(key, arena[i as usize].key());
        if ord == Ordering::Equal {
            return Descent::Found(i);
        }
        parent = Some(i);
        side = Side::of(ord);
        curr = child(arena, i, side);
    }
    Descent::Vacant { parent, side }
}

/// Links the fresh, unlinked `node` as the `side` child of `parent`, or as
/// the root when `parent` is `None`. Returns the new root.
pub fn attach<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    parent: Option<u32>,
    side: Side,
) -> Option<u32> {
    set_p(arena, node, parent);
    match parent {
        Some(p) => {
            set_child(arena, p, side, Some(node));
            root
        }
        None => Some(node),
    }
}

/// Outcome of physically unlinking a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detached {
    pub root: Option<u32>,
    /// The node taken out of the tree. It carries the removed entry.
    pub node: u32,
    /// Former parent of `node` and the side of it that lost `node`.
    pub parent: Option<(u32, Side)>,
    /// The sole child that took `node`'s place, if any.
    pub child: Option<u32>,
}

/// Removes `node`'s entry from the tree structure.
///
/// A node with two children is never unlinked itself: its payload is swapped
/// with its successor's and the successor (at most one child) is unlinked
/// instead. The unlinked node ends up with no links.
pub fn detach<K, V, N>(arena: &mut [N], root: Option<u32>, node: u32) -> Detached
where
    N: KvNode<K, V>,
{
    let target = match (get_l(arena, node), successor(arena, node)) {
        (Some(_), Some(s)) => {
            swap_payload::<K, V, N>(arena, node, s);
            s
        }
        _ => node,
    };

    let p = get_p(arena, target);
    let parent = p.map(|p| (p, side_of(arena, p, target)));
    let child = get_l(arena, target).or(get_r(arena, target));
    let root = replace_child(arena, root, p, target, child);

    set_p(arena, target, None);
    set_l(arena, target, None);
    set_r(arena, target, None);

    Detached {
        root,
        node: target,
        parent,
        child,
    }
}

/// Checks parent/child link symmetry and strict key order, returning the
/// number of reachable nodes. Walks with an explicit stack.
pub fn assert_links_and_order<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<usize, InvariantError>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(0);
    };
    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent(root));
    }

    let mut count = 0;
    let mut prev_node: Option<u32> = None;
    let mut stack = Vec::new();
    let mut curr = Some(root);
    loop {
        while let Some(i) = curr {
            for c in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
                if get_p(arena, c) != Some(i) {
                    return Err(InvariantError::BrokenParentLink { parent: i, child: c });
                }
            }
            stack.push(i);
            curr = get_l(arena, i);
        }
        let Some(i) = stack.pop() else {
            break;
        };
        if let Some(prev) = prev_node {
            let ord = comparator(arena[prev as usize].key(), arena[i as usize].key());
            if ord != Ordering::Less {
                return Err(InvariantError::OrderViolated(i));
            }
        }
        count += 1;
        if count > arena.len() {
            // A link cycle would otherwise never end.
            return Err(InvariantError::CountMismatch {
                expected: arena.len(),
                actual: count,
            });
        }
        prev_node = Some(i);
        curr = get_r(arena, i);
    }

    Ok(count)
}
