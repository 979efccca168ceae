//! Mutation engine: insert, delete, relabel.
//!
//! Every operation clones the input tree, rewrites the clone and returns it,
//! leaving the original untouched so history snapshots stay independent.
//! `None` is the silent no-op outcome for invalid targets, not a failure.

use tracing::{debug, instrument};

use crate::domain::locate::{locate, locate_mut, Slot};
use crate::domain::node::{BranchSlot, Children, Node, ROOT_ID};

/// Insert `node` under `parent_id`, splicing it between the parent and the
/// parent's existing subtree at that position.
///
/// No-op when the parent does not exist, is an end node, or is a branch and
/// no `slot` was given. The caller constructs the node so its generated id
/// stays observable.
///
/// # Panics
///
/// Panics if `node.id` already exists in the tree. Ids come from a
/// collision-free generator, so a duplicate is a programming error.
#[instrument(level = "debug", skip(tree, node))]
pub fn insert(tree: &Node, parent_id: &str, node: Node, slot: Option<BranchSlot>) -> Option<Node> {
    assert!(
        tree.iter().all(|n| n.id != node.id),
        "duplicate node id: {}",
        node.id
    );

    let mut next_tree = tree.clone();
    let Some(parent) = locate_mut(&mut next_tree, parent_id) else {
        debug!("insert ignored: no node with id {parent_id}");
        return None;
    };

    match &mut parent.children {
        Children::Action { next } => {
            let old = next.take();
            *next = Some(Box::new(adopt(node, old)));
        }
        Children::Branch { on_true, on_false } => {
            let target = match slot {
                Some(BranchSlot::True) => on_true,
                Some(BranchSlot::False) => on_false,
                None => {
                    debug!("insert ignored: branch parent {parent_id} needs a slot");
                    return None;
                }
            };
            let old = target.take();
            *target = Some(Box::new(adopt(node, old)));
        }
        Children::End => {
            debug!("insert ignored: parent {parent_id} is an end node");
            return None;
        }
    }

    Some(next_tree)
}

/// Splice rule: the inserted node adopts the slot's previous occupant as its
/// own descendant. An action takes it as `next`, a branch as `on_true`
/// (`on_false` stays empty). An end node cannot carry children, so whatever
/// followed is discarded entirely.
fn adopt(mut node: Node, old: Option<Box<Node>>) -> Node {
    if old.is_some() {
        match &mut node.children {
            Children::Action { next } => *next = old,
            Children::Branch { on_true, .. } => *on_true = old,
            Children::End => {}
        }
    }
    node
}

/// Delete the node with `node_id`, promoting its subtree to fill the gap.
///
/// No-op for the reserved root id, unknown ids, or a parentless match.
#[instrument(level = "debug", skip(tree))]
pub fn delete(tree: &Node, node_id: &str) -> Option<Node> {
    if node_id == ROOT_ID {
        debug!("delete ignored: root is not deletable");
        return None;
    }

    // Re-derive parent linkage on the original, then rewrite the clone.
    let Some(found) = locate(tree, node_id) else {
        debug!("delete ignored: no node with id {node_id}");
        return None;
    };
    let (parent, slot) = found.parent?;
    let parent_id = parent.id.clone();

    let mut next_tree = tree.clone();
    let parent = locate_mut(&mut next_tree, &parent_id)?;
    let slot_ref = match (&mut parent.children, slot) {
        (Children::Action { next }, Slot::Next) => next,
        (Children::Branch { on_true, .. }, Slot::OnTrue) => on_true,
        (Children::Branch { on_false, .. }, Slot::OnFalse) => on_false,
        // linkage came from the same tree; a mismatch cannot happen
        _ => return None,
    };
    let removed = slot_ref.take()?;
    *slot_ref = promoted(*removed);

    Some(next_tree)
}

/// Inverse splice: the deleted node's own subtree fills the slot it leaves.
/// A deleted branch promotes its true side when both exist and the false
/// subtree is discarded. A deleted end node leaves the slot empty.
fn promoted(node: Node) -> Option<Box<Node>> {
    match node.children {
        Children::Action { next } => next,
        Children::Branch { on_true, on_false } => on_true.or(on_false),
        Children::End => None,
    }
}

/// Replace the label of the node with `node_id` verbatim — no trimming, no
/// validation, the empty string is legal. No-op when the id is unknown.
#[instrument(level = "debug", skip(tree))]
pub fn relabel(tree: &Node, node_id: &str, new_label: &str) -> Option<Node> {
    let mut next_tree = tree.clone();
    let Some(node) = locate_mut(&mut next_tree, node_id) else {
        debug!("relabel ignored: no node with id {node_id}");
        return None;
    };
    node.label = new_label.to_string();
    Some(next_tree)
}
