//! Arena slot management.
//!
//! The arena stays dense: a released slot is filled by the last node, whose
//! neighbours are re-pointed to its new index. Indices are therefore stable
//! within one map operation but not across removals.

use crate::types::{KvNode, Node};

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Exchanges the key/value payloads of two nodes, leaving links and
/// balance metadata where they are.
pub fn swap_payload<K, V, N>(arena: &mut [N], a: u32, b: u32)
where
    N: KvNode<K, V>,
{
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    let (k1, v1) = head[lo as usize].entry_mut();
    let (k2, v2) = tail[0].entry_mut();
    std::mem::swap(k1, k2);
    std::mem::swap(v1, v2);
}

/// Takes the already unlinked node at `idx` out of the arena.
///
/// Returns the new root (it changes when the root was the relocated last
/// slot) and the removed node.
pub fn release<N: Node>(arena: &mut Vec<N>, root: Option<u32>, idx: u32) -> (Option<u32>, N) {
    let last = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(idx as usize);
    if idx == last {
        return (root, removed);
    }

    if let Some(p) = get_p(arena, idx) {
        if get_l(arena, p) == Some(last) {
            set_l(arena, p, Some(idx));
        } else {
            set_r(arena, p, Some(idx));
        }
    }
    if let Some(l) = get_l(arena, idx) {
        set_p(arena, l, Some(idx));
    }
    if let Some(r) = get_r(arena, idx) {
        set_p(arena, r, Some(idx));
    }

    let root = if root == Some(last) { Some(idx) } else { root };
    (root, removed)
}
