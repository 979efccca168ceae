//! Mutation engine tests: splice rules, promotion rules, no-op policy.

use std::collections::HashSet;

use flowedit::domain::mutate;
use flowedit::domain::{locate, BranchSlot, Children, Node, NodeKind, ROOT_ID};
use flowedit::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn root() -> Node {
    Node::with_id(NodeKind::Action, "Start", ROOT_ID)
}

fn node(kind: NodeKind, id: &str) -> Node {
    Node::with_id(kind, kind.default_label(), id)
}

/// The action child slot of `tree`'s node with `id`.
fn next_of<'a>(tree: &'a Node, id: &str) -> Option<&'a Node> {
    let found = locate(tree, id).expect("node present");
    match &found.node.children {
        Children::Action { next } => next.as_deref(),
        other => panic!("expected action node, got {other:?}"),
    }
}

fn branch_of<'a>(tree: &'a Node, id: &str) -> (Option<&'a Node>, Option<&'a Node>) {
    let found = locate(tree, id).expect("node present");
    match &found.node.children {
        Children::Branch { on_true, on_false } => (on_true.as_deref(), on_false.as_deref()),
        other => panic!("expected branch node, got {other:?}"),
    }
}

// ============================================================
// Insert: splice rule
// ============================================================

#[test]
fn given_empty_root_when_inserting_action_then_becomes_child() {
    let tree = root();
    let new_tree = mutate::insert(&tree, ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();

    assert_eq!(next_of(&new_tree, ROOT_ID).unwrap().id, "a");
    // original untouched
    assert!(next_of(&tree, ROOT_ID).is_none());
}

#[test]
fn given_occupied_action_slot_when_inserting_action_then_old_child_becomes_next() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    let tree = mutate::insert(&tree, ROOT_ID, node(NodeKind::Action, "b"), None).unwrap();

    assert_eq!(next_of(&tree, ROOT_ID).unwrap().id, "b");
    assert_eq!(next_of(&tree, "b").unwrap().id, "a");
}

#[test]
fn given_occupied_action_slot_when_inserting_branch_then_old_child_on_true() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    let tree = mutate::insert(&tree, ROOT_ID, node(NodeKind::Branch, "cond"), None).unwrap();

    assert_eq!(next_of(&tree, ROOT_ID).unwrap().id, "cond");
    let (on_true, on_false) = branch_of(&tree, "cond");
    assert_eq!(on_true.unwrap().id, "a");
    assert!(on_false.is_none());
}

#[test]
fn given_occupied_action_slot_when_inserting_end_then_subtree_discarded() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    let tree = mutate::insert(&tree, "a", node(NodeKind::Action, "b"), None).unwrap();
    let tree = mutate::insert(&tree, ROOT_ID, node(NodeKind::End, "stop"), None).unwrap();

    assert_eq!(next_of(&tree, ROOT_ID).unwrap().id, "stop");
    // the whole a -> b chain is gone
    assert!(locate(&tree, "a").is_none());
    assert!(locate(&tree, "b").is_none());
}

#[test]
fn given_occupied_branch_slot_when_inserting_action_then_old_child_becomes_next() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Branch, "cond"), None).unwrap();
    let tree = mutate::insert(
        &tree,
        "cond",
        node(NodeKind::Action, "a"),
        Some(BranchSlot::True),
    )
    .unwrap();
    let tree = mutate::insert(
        &tree,
        "cond",
        node(NodeKind::Action, "b"),
        Some(BranchSlot::True),
    )
    .unwrap();

    let (on_true, on_false) = branch_of(&tree, "cond");
    assert_eq!(on_true.unwrap().id, "b");
    assert!(on_false.is_none());
    assert_eq!(next_of(&tree, "b").unwrap().id, "a");
}

#[test]
fn given_occupied_branch_slot_when_inserting_branch_then_old_child_on_true() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Branch, "outer"), None).unwrap();
    let tree = mutate::insert(
        &tree,
        "outer",
        node(NodeKind::Action, "a"),
        Some(BranchSlot::False),
    )
    .unwrap();
    let tree = mutate::insert(
        &tree,
        "outer",
        node(NodeKind::Branch, "inner"),
        Some(BranchSlot::False),
    )
    .unwrap();

    let (_, on_false) = branch_of(&tree, "outer");
    assert_eq!(on_false.unwrap().id, "inner");
    let (inner_true, inner_false) = branch_of(&tree, "inner");
    assert_eq!(inner_true.unwrap().id, "a");
    assert!(inner_false.is_none());
}

// ============================================================
// Insert: no-op policy
// ============================================================

#[test]
fn given_unknown_parent_when_inserting_then_noop() {
    let tree = root();
    assert!(mutate::insert(&tree, "missing", node(NodeKind::Action, "a"), None).is_none());
}

#[test]
fn given_end_parent_when_inserting_then_noop() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::End, "stop"), None).unwrap();
    assert!(mutate::insert(&tree, "stop", node(NodeKind::Action, "a"), None).is_none());
}

#[test]
fn given_branch_parent_without_slot_when_inserting_then_noop() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Branch, "cond"), None).unwrap();
    assert!(mutate::insert(&tree, "cond", node(NodeKind::Action, "a"), None).is_none());
}

// ============================================================
// Delete: promotion rule
// ============================================================

#[test]
fn given_action_with_child_when_deleted_then_child_promoted() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    let tree = mutate::insert(&tree, "a", node(NodeKind::Action, "b"), None).unwrap();
    let tree = mutate::delete(&tree, "a").unwrap();

    assert_eq!(next_of(&tree, ROOT_ID).unwrap().id, "b");
    assert!(locate(&tree, "a").is_none());
}

#[test]
fn given_branch_with_both_children_when_deleted_then_true_side_promoted() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Branch, "cond"), None).unwrap();
    let tree = mutate::insert(
        &tree,
        "cond",
        node(NodeKind::Action, "yes"),
        Some(BranchSlot::True),
    )
    .unwrap();
    let tree = mutate::insert(
        &tree,
        "cond",
        node(NodeKind::Action, "no"),
        Some(BranchSlot::False),
    )
    .unwrap();
    let tree = mutate::delete(&tree, "cond").unwrap();

    // true branch wins, the false subtree is discarded entirely
    assert_eq!(next_of(&tree, ROOT_ID).unwrap().id, "yes");
    assert!(locate(&tree, "no").is_none());
}

#[test]
fn given_branch_with_only_false_child_when_deleted_then_false_side_promoted() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Branch, "cond"), None).unwrap();
    let tree = mutate::insert(
        &tree,
        "cond",
        node(NodeKind::Action, "no"),
        Some(BranchSlot::False),
    )
    .unwrap();
    let tree = mutate::delete(&tree, "cond").unwrap();

    assert_eq!(next_of(&tree, ROOT_ID).unwrap().id, "no");
}

#[test]
fn given_end_node_when_deleted_then_slot_left_empty() {
    // insert End over an occupied slot, then delete it: the original
    // subtree is NOT recovered, the slot is simply empty
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    let tree = mutate::insert(&tree, ROOT_ID, node(NodeKind::End, "stop"), None).unwrap();
    let tree = mutate::delete(&tree, "stop").unwrap();

    assert!(next_of(&tree, ROOT_ID).is_none());
    assert!(locate(&tree, "a").is_none());
}

#[test]
fn given_branch_node_deleted_from_branch_slot_then_true_side_fills_slot() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Branch, "outer"), None).unwrap();
    let tree = mutate::insert(
        &tree,
        "outer",
        node(NodeKind::Branch, "inner"),
        Some(BranchSlot::True),
    )
    .unwrap();
    let tree = mutate::insert(
        &tree,
        "inner",
        node(NodeKind::Action, "deep"),
        Some(BranchSlot::True),
    )
    .unwrap();
    let tree = mutate::delete(&tree, "inner").unwrap();

    let (on_true, _) = branch_of(&tree, "outer");
    assert_eq!(on_true.unwrap().id, "deep");
}

// ============================================================
// Delete: no-op policy
// ============================================================

#[test]
fn given_root_when_deleted_then_noop() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    assert!(mutate::delete(&tree, ROOT_ID).is_none());
}

#[test]
fn given_unknown_id_when_deleted_then_noop() {
    assert!(mutate::delete(&root(), "missing").is_none());
}

// ============================================================
// Relabel
// ============================================================

#[test]
fn given_known_node_when_relabeling_then_label_replaced_verbatim() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    let tree = mutate::relabel(&tree, "a", "  Send invoice  ").unwrap();
    assert_eq!(locate(&tree, "a").unwrap().node.label, "  Send invoice  ");
}

#[test]
fn given_empty_label_when_relabeling_then_accepted() {
    let tree = mutate::relabel(&root(), ROOT_ID, "").unwrap();
    assert_eq!(locate(&tree, ROOT_ID).unwrap().node.label, "");
}

#[test]
fn given_unknown_id_when_relabeling_then_noop() {
    assert!(mutate::relabel(&root(), "missing", "x").is_none());
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn given_insert_sequence_then_all_ids_distinct() {
    let mut tree = root();
    for _ in 0..10 {
        tree = mutate::insert(&tree, ROOT_ID, Node::new(NodeKind::Action), None).unwrap();
    }
    tree = mutate::insert(&tree, ROOT_ID, Node::new(NodeKind::Branch), None).unwrap();

    let ids: Vec<&str> = tree.iter().map(|n| n.id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn given_mutations_then_input_tree_never_modified() {
    let tree = mutate::insert(&root(), ROOT_ID, node(NodeKind::Action, "a"), None).unwrap();
    let before = tree.clone();

    mutate::insert(&tree, "a", node(NodeKind::End, "stop"), None).unwrap();
    mutate::delete(&tree, "a").unwrap();
    mutate::relabel(&tree, "a", "changed").unwrap();

    assert_eq!(tree, before);
}

// ============================================================
// Concrete scenario
// ============================================================

#[test]
fn given_branch_scenario_when_branch_deleted_then_true_action_promoted_to_root() {
    // start -> B(branch); B.on_true = action; delete B => start -> action
    let tree = root();
    let tree = mutate::insert(&tree, ROOT_ID, node(NodeKind::Branch, "B"), None).unwrap();
    let (on_true, on_false) = branch_of(&tree, "B");
    assert!(on_true.is_none());
    assert!(on_false.is_none());

    let tree = mutate::insert(
        &tree,
        "B",
        node(NodeKind::Action, "act"),
        Some(BranchSlot::True),
    )
    .unwrap();
    let (on_true, on_false) = branch_of(&tree, "B");
    assert_eq!(on_true.unwrap().id, "act");
    assert!(on_false.is_none());

    let tree = mutate::delete(&tree, "B").unwrap();
    assert_eq!(next_of(&tree, ROOT_ID).unwrap().id, "act");
    assert!(locate(&tree, "B").is_none());

    // root untouched throughout
    let found = locate(&tree, ROOT_ID).unwrap();
    assert_eq!(found.node.kind(), NodeKind::Action);
    assert!(found.parent.is_none());
}
