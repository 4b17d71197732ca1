//! Red-black rebalancing.
//!
//! Fix-up code reads links as raw handles, so an absent child is simply
//! [`NIL`] and its color reads as black without unwrapping anything.

use crate::error::InvariantError;
use crate::trace::trace_log;
use crate::types::Side;
use crate::util::{detach, rotate};

use super::types::{Color, RbNode, NIL};

#[inline]
fn color<K, V>(arena: &[RbNode<K, V>], i: u32) -> Color {
    if i == NIL {
        Color::Black
    } else {
        arena[i as usize].color
    }
}

/// Writes through to real nodes only; the sentinel stays black.
#[inline]
fn set_color<K, V>(arena: &mut [RbNode<K, V>], i: u32, c: Color) {
    if i != NIL {
        arena[i as usize].color = c;
    }
}

#[inline]
fn raw_child<K, V>(arena: &[RbNode<K, V>], i: u32, side: Side) -> u32 {
    match side {
        Side::Left => arena[i as usize].l,
        Side::Right => arena[i as usize].r,
    }
}

/// Restores the color invariants after the red leaf `node` was attached.
pub fn fix_insert<K, V>(arena: &mut [RbNode<K, V>], mut root: Option<u32>, node: u32) -> Option<u32> {
    let mut z = node;
    loop {
        let p = arena[z as usize].p;
        if color(arena, p) == Color::Black {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = arena[p as usize].p;
        if g == NIL {
            break;
        }
        let side = if arena[g as usize].l == p {
            Side::Left
        } else {
            Side::Right
        };
        let u = raw_child(arena, g, side.opposite());

        if color(arena, u) == Color::Red {
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            z = g;
            continue;
        }

        let mut top = p;
        if raw_child(arena, p, side.opposite()) == z {
            root = rotate(arena, root, p, side);
            top = z;
        }
        set_color(arena, top, Color::Black);
        set_color(arena, g, Color::Red);
        root = rotate(arena, root, g, side.opposite());
        trace_log!(g, "rb insert rotated");
        break;
    }

    if let Some(r) = root {
        set_color(arena, r, Color::Black);
    }
    root
}

/// Restores black height after a black node was unlinked.
///
/// `x` is the child that replaced it ([`NIL`] when none) and `at` its parent
/// together with the side `x` hangs on; the side is needed because a `NIL`
/// child cannot say where it is.
pub fn fix_remove<K, V>(
    arena: &mut [RbNode<K, V>],
    mut root: Option<u32>,
    mut x: u32,
    mut at: Option<(u32, Side)>,
) -> Option<u32> {
    while let Some((parent, side)) = at {
        if color(arena, x) == Color::Red {
            break;
        }
        let far = side.opposite();
        let mut s = raw_child(arena, parent, far);

        if color(arena, s) == Color::Red {
            set_color(arena, s, Color::Black);
            set_color(arena, parent, Color::Red);
            root = rotate(arena, root, parent, side);
            s = raw_child(arena, parent, far);
        }

        if s == NIL {
            x = parent;
            at = up(arena, x);
            continue;
        }

        let near_black = color(arena, raw_child(arena, s, side)) == Color::Black;
        let far_black = color(arena, raw_child(arena, s, far)) == Color::Black;
        if near_black && far_black {
            set_color(arena, s, Color::Red);
            x = parent;
            at = up(arena, x);
            continue;
        }

        if far_black {
            let near = raw_child(arena, s, side);
            set_color(arena, near, Color::Black);
            set_color(arena, s, Color::Red);
            root = rotate(arena, root, s, far);
            s = raw_child(arena, parent, far);
        }

        set_color(arena, s, color(arena, parent));
        set_color(arena, parent, Color::Black);
        let far_child = raw_child(arena, s, far);
        set_color(arena, far_child, Color::Black);
        root = rotate(arena, root, parent, side);
        trace_log!(parent, "rb remove rotated");
        x = root.unwrap_or(NIL);
        break;
    }

    set_color(arena, x, Color::Black);
    root
}

#[inline]
fn up<K, V>(arena: &[RbNode<K, V>], x: u32) -> Option<(u32, Side)> {
    let p = arena[x as usize].p;
    if p == NIL {
        return None;
    }
    let side = if arena[p as usize].l == x {
        Side::Left
    } else {
        Side::Right
    };
    Some((p, side))
}

/// Unlinks `node` (via its successor when it has two children) and repairs
/// black height if a black node left the tree. Returns the new root and the
/// index holding the removed entry.
pub fn remove<K, V>(arena: &mut [RbNode<K, V>], root: Option<u32>, node: u32) -> (Option<u32>, u32) {
    let d = detach::<K, V, _>(arena, root, node);
    let mut root = d.root;
    if arena[d.node as usize].color == Color::Black {
        root = fix_remove(arena, root, d.child.unwrap_or(NIL), d.parent);
    }
    (root, d.node)
}

fn black_height<K, V>(arena: &[RbNode<K, V>], node: u32) -> Result<usize, InvariantError> {
    if node == NIL {
        return Ok(1);
    }
    let n = &arena[node as usize];
    if n.color == Color::Red && (color(arena, n.l) == Color::Red || color(arena, n.r) == Color::Red) {
        return Err(InvariantError::RedRed(node));
    }
    let lh = black_height(arena, n.l)?;
    let rh = black_height(arena, n.r)?;
    if lh != rh {
        return Err(InvariantError::BlackHeightMismatch(node));
    }
    Ok(lh + usize::from(n.color == Color::Black))
}

/// Checks root color, the red-red rule and equal black height on every
/// root-to-sentinel path (the sentinel counts as black).
pub fn assert_red_black_tree<K, V>(arena: &[RbNode<K, V>], root: Option<u32>) -> Result<(), InvariantError> {
    let Some(root) = root else {
        return Ok(());
    };
    if arena[root as usize].color != Color::Black {
        return Err(InvariantError::RedRoot(root));
    }
    black_height(arena, root).map(|_| ())
}
