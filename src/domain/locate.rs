//! Tree locator: find a node by id and re-derive its parent linkage.
//!
//! Parent and slot are rediscovered by traversal instead of keeping
//! back-references, which would require shared ownership. Trees stay small
//! under interactive editing, so the re-search is cheap.

use crate::domain::node::{Children, Node};

/// Which parent slot holds a located node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Single child slot of an action parent.
    Next,
    /// True side of a branch parent.
    OnTrue,
    /// False side of a branch parent.
    OnFalse,
}

/// A located node together with its parent linkage.
#[derive(Debug)]
pub struct Located<'a> {
    pub node: &'a Node,
    /// Parent node and the slot within it that holds `node`; `None` when
    /// the match is the root itself.
    pub parent: Option<(&'a Node, Slot)>,
}

/// Depth-first search for `target_id` starting at `root`.
///
/// Actions descend into their single child; branches descend into the true
/// side first. Ids are unique, so the search short-circuits on the first
/// match. `None` is the expected not-found outcome, used by callers to
/// validate input.
pub fn locate<'a>(root: &'a Node, target_id: &str) -> Option<Located<'a>> {
    if root.id == target_id {
        return Some(Located {
            node: root,
            parent: None,
        });
    }
    locate_below(root, target_id)
}

fn locate_below<'a>(parent: &'a Node, target_id: &str) -> Option<Located<'a>> {
    match &parent.children {
        Children::Action { next } => {
            let child = next.as_deref()?;
            descend(parent, Slot::Next, child, target_id)
        }
        Children::Branch { on_true, on_false } => {
            if let Some(child) = on_true.as_deref() {
                if let Some(found) = descend(parent, Slot::OnTrue, child, target_id) {
                    return Some(found);
                }
            }
            let child = on_false.as_deref()?;
            descend(parent, Slot::OnFalse, child, target_id)
        }
        Children::End => None,
    }
}

fn descend<'a>(parent: &'a Node, slot: Slot, child: &'a Node, target_id: &str) -> Option<Located<'a>> {
    if child.id == target_id {
        return Some(Located {
            node: child,
            parent: Some((parent, slot)),
        });
    }
    locate_below(child, target_id)
}

/// Mutable lookup by the same traversal order.
pub(crate) fn locate_mut<'a>(node: &'a mut Node, target_id: &str) -> Option<&'a mut Node> {
    if node.id == target_id {
        return Some(node);
    }
    for child in node.child_nodes_mut() {
        if let Some(found) = locate_mut(child, target_id) {
            return Some(found);
        }
    }
    None
}
