use std::cmp::Ordering;

use ordered_forest::types::{KvNode, Node, Side};
use ordered_forest::util::{
    attach, detach, first, last, locate, next, prev, release, rotate_left, rotate_right,
    successor, swap_payload, Descent, InOrder,
};

#[derive(Clone, Debug)]
struct TestNode {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    k: i32,
    v: i32,
}

impl TestNode {
    fn new(k: i32, v: i32) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
        }
    }
}

impl Node for TestNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl KvNode<i32, i32> for TestNode {
    fn key(&self) -> &i32 {
        &self.k
    }

    fn value(&self) -> &i32 {
        &self.v
    }

    fn value_mut(&mut self) -> &mut i32 {
        &mut self.v
    }

    fn set_value(&mut self, value: i32) {
        self.v = value;
    }

    fn entry_mut(&mut self) -> (&mut i32, &mut i32) {
        (&mut self.k, &mut self.v)
    }

    fn into_entry(self) -> (i32, i32) {
        (self.k, self.v)
    }
}

fn cmp_i32(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

fn inorder_keys(arena: &[TestNode], root: Option<u32>) -> Vec<i32> {
    InOrder::new(arena, root).map(|i| arena[i as usize].k).collect()
}

fn fixture_tree() -> (Vec<TestNode>, Option<u32>) {
    //        10
    //      /    \
    //     5      20
    //      \    / \
    //       7  15  30
    let mut arena = vec![
        TestNode::new(10, 100),
        TestNode::new(5, 50),
        TestNode::new(20, 200),
        TestNode::new(7, 70),
        TestNode::new(15, 150),
        TestNode::new(30, 300),
    ];

    arena[0].l = Some(1);
    arena[0].r = Some(2);

    arena[1].p = Some(0);
    arena[1].r = Some(3);

    arena[2].p = Some(0);
    arena[2].l = Some(4);
    arena[2].r = Some(5);

    arena[3].p = Some(1);
    arena[4].p = Some(2);
    arena[5].p = Some(2);

    (arena, Some(0))
}

fn build_tree(keys: &[i32]) -> (Vec<TestNode>, Option<u32>) {
    let mut arena = Vec::<TestNode>::new();
    let mut root = None;
    for key in keys {
        let idx = arena.len() as u32;
        let Descent::Vacant { parent, side } = locate::<i32, i32, _, _>(&arena, root, key, &cmp_i32) else {
            panic!("duplicate key {key}");
        };
        arena.push(TestNode::new(*key, *key * 10));
        root = attach(&mut arena, root, idx, parent, side);
    }
    (arena, root)
}

fn assert_tree_links(arena: &[TestNode], root: Option<u32>) {
    let Some(root) = root else {
        return;
    };
    assert_eq!(arena[root as usize].p, None);
    let mut stack = vec![root];
    let mut seen = 0;
    while let Some(i) = stack.pop() {
        seen += 1;
        assert!(seen <= arena.len(), "cycle detected at node {i}");
        for c in [arena[i as usize].l, arena[i as usize].r].into_iter().flatten() {
            assert_eq!(arena[c as usize].p, Some(i));
            stack.push(c);
        }
    }
}

fn key_at(arena: &[TestNode], idx: Option<u32>) -> Option<i32> {
    idx.map(|i| arena[i as usize].k)
}

#[test]
fn util_first_last_next_prev_matrix() {
    let (arena, root) = fixture_tree();
    assert_eq!(key_at(&arena, first(&arena, root)), Some(5));
    assert_eq!(key_at(&arena, last(&arena, root)), Some(30));
    assert_eq!(first::<TestNode>(&arena, None), None);

    let mut keys = Vec::new();
    let mut curr = first(&arena, root);
    while let Some(i) = curr {
        keys.push(arena[i as usize].k);
        curr = next(&arena, i);
    }
    assert_eq!(keys, vec![5, 7, 10, 15, 20, 30]);

    assert_eq!(key_at(&arena, prev(&arena, 2)), Some(15));
    assert_eq!(key_at(&arena, prev(&arena, 4)), Some(10));
    assert_eq!(prev(&arena, 1), None);
    assert_eq!(next(&arena, 5), None);
}

#[test]
fn util_successor_matrix() {
    let (arena, _) = fixture_tree();
    // Root: right child 20, then leftmost 15.
    assert_eq!(key_at(&arena, successor(&arena, 0)), Some(15));
    // 5 has only a right child.
    assert_eq!(key_at(&arena, successor(&arena, 1)), Some(7));
    // No right child: no successor inside the subtree.
    assert_eq!(successor(&arena, 3), None);
    assert_eq!(successor(&arena, 4), None);
}

#[test]
fn util_locate_matrix() {
    let (arena, root) = fixture_tree();
    assert_eq!(locate::<i32, i32, _, _>(&arena, root, &15, &cmp_i32), Descent::Found(4));
    assert_eq!(
        locate::<i32, i32, _, _>(&arena, root, &6, &cmp_i32),
        Descent::Vacant {
            parent: Some(3),
            side: Side::Left
        }
    );
    assert_eq!(
        locate::<i32, i32, _, _>(&arena, root, &99, &cmp_i32),
        Descent::Vacant {
            parent: Some(5),
            side: Side::Right
        }
    );
    assert_eq!(
        locate::<i32, i32, TestNode, _>(&[], None, &1, &cmp_i32),
        Descent::Vacant {
            parent: None,
            side: Side::Left
        }
    );
}

#[test]
fn util_attach_shape_matrix() {
    let (arena, root) = build_tree(&[1, 5, 2, 3]);
    assert_eq!(root, Some(0));
    assert_eq!(arena[0].r, Some(1));
    assert_eq!(arena[1].l, Some(2));
    assert_eq!(arena[2].r, Some(3));
    assert_tree_links(&arena, root);
    assert_eq!(inorder_keys(&arena, root), vec![1, 2, 3, 5]);
}

#[test]
fn util_rotate_left_matrix() {
    let (mut arena, root) = fixture_tree();
    // Rotating the root left lifts 20.
    let root = rotate_left(&mut arena, root, 0);
    assert_eq!(root, Some(2));
    assert_eq!(arena[2].p, None);
    assert_eq!(arena[2].l, Some(0));
    assert_eq!(arena[0].p, Some(2));
    // 20's former left child (15) moved under 10.
    assert_eq!(arena[0].r, Some(4));
    assert_eq!(arena[4].p, Some(0));
    assert_tree_links(&arena, root);
    assert_eq!(inorder_keys(&arena, root), vec![5, 7, 10, 15, 20, 30]);
}

#[test]
fn util_rotate_right_inner_node_matrix() {
    let (mut arena, root) = fixture_tree();
    // Rotating 20 right lifts 15 into 20's slot under the root.
    let new_root = rotate_right(&mut arena, root, 2);
    assert_eq!(new_root, root);
    assert_eq!(arena[0].r, Some(4));
    assert_eq!(arena[4].p, Some(0));
    assert_eq!(arena[4].r, Some(2));
    assert_eq!(arena[2].l, None);
    assert_tree_links(&arena, new_root);
    assert_eq!(inorder_keys(&arena, new_root), vec![5, 7, 10, 15, 20, 30]);
}

#[test]
fn util_rotate_without_child_is_noop_matrix() {
    let (mut arena, root) = fixture_tree();
    let before: Vec<_> = arena.iter().map(|n| (n.p, n.l, n.r)).collect();
    // 5 has no left child, 7 has no children at all.
    assert_eq!(rotate_right(&mut arena, root, 1), root);
    assert_eq!(rotate_left(&mut arena, root, 3), root);
    let after: Vec<_> = arena.iter().map(|n| (n.p, n.l, n.r)).collect();
    assert_eq!(before, after);
}

#[test]
fn util_rotations_cancel_matrix() {
    let (mut arena, root) = fixture_tree();
    let before: Vec<_> = arena.iter().map(|n| (n.p, n.l, n.r)).collect();
    let root = rotate_left(&mut arena, root, 0);
    let root = rotate_right(&mut arena, root, 2);
    assert_eq!(root, Some(0));
    let after: Vec<_> = arena.iter().map(|n| (n.p, n.l, n.r)).collect();
    assert_eq!(before, after);
}

#[test]
fn util_detach_leaf_matrix() {
    let (mut arena, root) = fixture_tree();
    let d = detach::<i32, i32, _>(&mut arena, root, 3);
    assert_eq!(d.node, 3);
    assert_eq!(d.parent, Some((1, Side::Right)));
    assert_eq!(d.child, None);
    assert_eq!(d.root, root);
    assert_eq!(arena[1].r, None);
    assert_eq!((arena[3].p, arena[3].l, arena[3].r), (None, None, None));
    assert_eq!(inorder_keys(&arena, d.root), vec![5, 10, 15, 20, 30]);
}

#[test]
fn util_detach_single_child_root_matrix() {
    let mut arena = vec![TestNode::new(10, 100), TestNode::new(5, 50)];
    arena[0].l = Some(1);
    arena[1].p = Some(0);
    let d = detach::<i32, i32, _>(&mut arena, Some(0), 0);
    assert_eq!(d.root, Some(1));
    assert_eq!(d.parent, None);
    assert_eq!(d.child, Some(1));
    assert_eq!(arena[1].p, None);
}

#[test]
fn util_detach_two_children_uses_successor_matrix() {
    let (mut arena, root) = fixture_tree();
    let d = detach::<i32, i32, _>(&mut arena, root, 0);
    // The successor (15, slot 4) is the node physically unlinked; it now
    // carries the removed entry while slot 0 holds 15.
    assert_eq!(d.node, 4);
    assert_eq!((arena[4].k, arena[4].v), (10, 100));
    assert_eq!((arena[0].k, arena[0].v), (15, 150));
    assert_eq!(d.parent, Some((2, Side::Left)));
    assert_eq!(d.root, Some(0));
    assert_tree_links(&arena, d.root);
    assert_eq!(inorder_keys(&arena, d.root), vec![5, 7, 15, 20, 30]);
}

#[test]
fn util_release_relocates_last_slot_matrix() {
    let (mut arena, root) = fixture_tree();
    // Unlink 7 (slot 3); slot 5 (30) is the last and moves into slot 3.
    let d = detach::<i32, i32, _>(&mut arena, root, 3);
    let (root, removed) = release(&mut arena, d.root, d.node);
    assert_eq!(removed.into_entry(), (7, 70));
    assert_eq!(arena.len(), 5);
    assert_eq!(arena[3].k, 30);
    assert_eq!(arena[2].r, Some(3));
    assert_tree_links(&arena, root);
    assert_eq!(inorder_keys(&arena, root), vec![5, 10, 15, 20, 30]);
}

#[test]
fn util_release_relocated_root_matrix() {
    // Root sits in the last slot.
    let mut arena = vec![TestNode::new(1, 1), TestNode::new(3, 3), TestNode::new(2, 2)];
    arena[2].l = Some(0);
    arena[2].r = Some(1);
    arena[0].p = Some(2);
    arena[1].p = Some(2);
    let d = detach::<i32, i32, _>(&mut arena, Some(2), 0);
    let (root, removed) = release(&mut arena, d.root, d.node);
    assert_eq!(removed.k, 1);
    assert_eq!(root, Some(0));
    assert_eq!(arena[0].k, 2);
    assert_eq!(arena[0].r, Some(1));
    assert_eq!(arena[1].p, Some(0));
    assert_tree_links(&arena, root);
}

#[test]
fn util_swap_payload_matrix() {
    let (mut arena, _) = fixture_tree();
    swap_payload::<i32, i32, _>(&mut arena, 5, 1);
    assert_eq!((arena[1].k, arena[1].v), (30, 300));
    assert_eq!((arena[5].k, arena[5].v), (5, 50));
    // Links stay put.
    assert_eq!(arena[1].r, Some(3));
    swap_payload::<i32, i32, _>(&mut arena, 2, 2);
    assert_eq!(arena[2].k, 20);
}

#[test]
fn util_in_order_is_restartable_matrix() {
    let (arena, root) = fixture_tree();
    let a = inorder_keys(&arena, root);
    let b = inorder_keys(&arena, root);
    assert_eq!(a, b);
    assert_eq!(InOrder::new(&arena, None).count(), 0);
}

#[test]
fn util_in_order_deep_chain_matrix() {
    // A 200k-long left chain would overflow a recursive walk.
    let n = 200_000;
    let mut arena: Vec<TestNode> = (0..n).map(|i| TestNode::new(n - i, 0)).collect();
    for i in 1..n as u32 {
        arena[(i - 1) as usize].l = Some(i);
        arena[i as usize].p = Some(i - 1);
    }
    let keys: Vec<i32> = InOrder::new(&arena, Some(0))
        .map(|i| arena[i as usize].k)
        .collect();
    assert_eq!(keys.len(), n as usize);
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(keys[0], 1);
}
