//! Tree export: structural JSON serialization of a workflow.
//!
//! Nesting mirrors the tree itself; per node the field order is id, kind,
//! label, children. Sufficient for a human or a downstream tool to
//! reconstruct an identical tree.

use crate::application::error::ApplicationResult;
use crate::domain::Node;

/// Pretty-printed JSON form of the tree.
pub fn to_json(tree: &Node) -> ApplicationResult<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}
