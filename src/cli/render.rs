//! Terminal tree view of a workflow.

use termtree::Tree;

use crate::domain::{Children, Node};

/// Render a workflow as an ASCII tree.
///
/// Branch slots are always shown, empty ones as `(empty)`, so the
/// TRUE/FALSE structure stays visible even before both sides are filled.
pub fn workflow_tree(node: &Node) -> Tree<String> {
    let root = node_line(node);
    match &node.children {
        Children::Action { next } => {
            let leaves: Vec<Tree<String>> = next.iter().map(|child| workflow_tree(child)).collect();
            Tree::new(root).with_leaves(leaves)
        }
        Children::Branch { on_true, on_false } => Tree::new(root).with_leaves(vec![
            slot_tree("true", on_true.as_deref()),
            slot_tree("false", on_false.as_deref()),
        ]),
        Children::End => Tree::new(root),
    }
}

fn slot_tree(slot: &str, child: Option<&Node>) -> Tree<String> {
    match child {
        Some(node) => {
            let mut tree = workflow_tree(node);
            tree.root = format!("{slot}: {}", tree.root);
            tree
        }
        None => Tree::new(format!("{slot}: (empty)")),
    }
}

fn node_line(node: &Node) -> String {
    format!("[{}] {} <{}>", node.kind(), node.label, node.id)
}
