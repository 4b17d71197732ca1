//! The rotation primitive shared by every balancer.
//!
//! ```text
//!     p                c
//!    / \    left      / \
//!   a   c   ---->    p   e
//!      / \          / \
//!     d   e        a   d
//! ```
//!
//! In-order key sequence is unchanged; only shape changes.

use crate::trace::trace_log;
use crate::types::{Node, Side};

use super::{child, replace_child, set_child, set_p};

/// Rotates `pivot` down towards `side`; its child on the opposite side
/// rises into its place and hands its inner child over to `pivot`.
///
/// Updates every affected parent link and, when `pivot` was the root, the
/// root slot. Returns the new root. A pivot without the rising child is left
/// untouched.
pub fn rotate<N: Node>(arena: &mut [N], root: Option<u32>, pivot: u32, side: Side) -> Option<u32> {
    let source = side.opposite();
    let Some(c) = child(arena, pivot, source) else {
        return root;
    };
    let inner = child(arena, c, side);
    let parent = arena[pivot as usize].p();

    set_child(arena, pivot, source, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(pivot));
    }
    let root = replace_child(arena, root, parent, pivot, Some(c));
    set_child(arena, c, side, Some(pivot));
    set_p(arena, pivot, Some(c));

    trace_log!(pivot, rising = c, ?side, "rotate");
    root
}

/// Left rotation: the right child of `pivot` becomes its parent.
#[inline]
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, pivot: u32) -> Option<u32> {
    rotate(arena, root, pivot, Side::Left)
}

/// Right rotation: the left child of `pivot` becomes its parent.
#[inline]
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, pivot: u32) -> Option<u32> {
    rotate(arena, root, pivot, Side::Right)
}
