//! AVL rebalancing.
//!
//! Both fix-up walks are iterative. Rotations go through the shared
//! primitive; balance factors of the two rotated nodes are recomputed from
//! their previous values, which holds for any shape.

use crate::error::InvariantError;
use crate::trace::trace_log;
use crate::types::Side;
use crate::util::{self, child, detach, get_p, side_of};

use super::types::AvlNode;

#[inline]
fn bf<K, V>(arena: &[AvlNode<K, V>], i: u32) -> i8 {
    arena[i as usize].bf
}

#[inline]
fn set_bf<K, V>(arena: &mut [AvlNode<K, V>], i: u32, v: i8) {
    arena[i as usize].bf = v;
}

/// Balance-factor sign of a subtree leaning towards `side`.
#[inline]
fn lean(side: Side) -> i8 {
    match side {
        Side::Left => -1,
        Side::Right => 1,
    }
}

/// Rotation that keeps the balance factors of the pivot and the rising
/// child exact.
fn rotate<K, V>(arena: &mut [AvlNode<K, V>], root: Option<u32>, pivot: u32, side: Side) -> Option<u32> {
    let Some(c) = child(arena, pivot, side.opposite()) else {
        return root;
    };
    let x = bf(arena, pivot);
    let y = bf(arena, c);
    let (x2, y2) = match side {
        Side::Left => {
            let x2 = x - 1 - y.max(0);
            (x2, y - 1 + x2.min(0))
        }
        Side::Right => {
            let x2 = x + 1 - y.min(0);
            (x2, y + 1 + x2.max(0))
        }
    };
    set_bf(arena, pivot, x2);
    set_bf(arena, c, y2);
    util::rotate(arena, root, pivot, side)
}

/// Restores balance after `node` was attached as a leaf.
///
/// Walks up while subtree heights keep growing. A single (or double)
/// rotation always ends the walk.
pub fn fix_insert<K, V>(arena: &mut [AvlNode<K, V>], mut root: Option<u32>, node: u32) -> Option<u32> {
    let mut curr = node;
    while let Some(parent) = get_p(arena, curr) {
        let side = side_of(arena, parent, curr);
        let grow = lean(side);
        let pbf = bf(arena, parent);

        if pbf == 0 {
            set_bf(arena, parent, grow);
            curr = parent;
            continue;
        }
        if pbf != grow {
            set_bf(arena, parent, 0);
            break;
        }

        set_bf(arena, parent, pbf + grow);
        if bf(arena, curr) == -grow {
            root = rotate(arena, root, curr, side);
        }
        root = rotate(arena, root, parent, side.opposite());
        trace_log!(parent, "avl insert rebalanced");
        break;
    }
    root
}

/// Restores balance after the subtree on `side` of the given parent lost a
/// level. `at` is `None` when the removed node was the root.
///
/// Keeps walking after a rotation unless the rotation left the subtree
/// height unchanged.
pub fn fix_remove<K, V>(
    arena: &mut [AvlNode<K, V>],
    mut root: Option<u32>,
    mut at: Option<(u32, Side)>,
) -> Option<u32> {
    while let Some((node, side)) = at {
        let nbf = bf(arena, node) - lean(side);
        set_bf(arena, node, nbf);

        let top = match nbf {
            0 => node,
            -1 | 1 => break,
            _ => {
                let heavy = side.opposite();
                let Some(s) = child(arena, node, heavy) else {
                    break;
                };
                let sbf = bf(arena, s);
                if sbf == lean(side) {
                    root = rotate(arena, root, s, heavy);
                }
                root = rotate(arena, root, node, side);
                trace_log!(node, sibling_bf = sbf, "avl remove rebalanced");
                if sbf == 0 {
                    break;
                }
                match get_p(arena, node) {
                    Some(top) => top,
                    None => break,
                }
            }
        };

        at = get_p(arena, top).map(|p| (p, side_of(arena, p, top)));
    }
    root
}

/// Unlinks `node` (via its successor when it has two children) and
/// rebalances. Returns the new root and the index holding the removed entry.
pub fn remove<K, V>(arena: &mut [AvlNode<K, V>], root: Option<u32>, node: u32) -> (Option<u32>, u32) {
    let d = detach::<K, V, _>(arena, root, node);
    (fix_remove(arena, d.root, d.parent), d.node)
}

fn height_checked<K, V>(arena: &[AvlNode<K, V>], node: Option<u32>) -> Result<i64, InvariantError> {
    let Some(i) = node else {
        return Ok(0);
    };
    let n = &arena[i as usize];
    let lh = height_checked(arena, n.l)?;
    let rh = height_checked(arena, n.r)?;
    let actual = rh - lh;
    if i64::from(n.bf) != actual {
        return Err(InvariantError::BalanceMismatch {
            node: i,
            stored: n.bf,
            actual,
        });
    }
    if !(-1..=1).contains(&actual) {
        return Err(InvariantError::Unbalanced(i));
    }
    Ok(1 + lh.max(rh))
}

/// Checks every stored balance factor against real subtree heights.
///
/// Recurses once per level and reports the first violation found on the
/// way back up.
pub fn assert_avl_tree<K, V>(arena: &[AvlNode<K, V>], root: Option<u32>) -> Result<(), InvariantError> {
    height_checked(arena, root).map(|_| ())
}
