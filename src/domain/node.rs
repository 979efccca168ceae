//! Workflow node: the single data entity of the tree.
//!
//! The children shape lives inside a tagged variant so that illegal states
//! (an end node carrying children) are unrepresentable.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

/// Reserved identifier of the workflow root.
///
/// The root always exists, is never deleted, and its id never changes.
pub const ROOT_ID: &str = "start";

/// Step kind, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Action,
    Branch,
    End,
}

impl NodeKind {
    /// Label a freshly inserted node of this kind starts with.
    pub fn default_label(&self) -> &'static str {
        match self {
            NodeKind::Action => "New Action",
            NodeKind::Branch => "New Branch",
            NodeKind::End => "End",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Action => write!(f, "action"),
            NodeKind::Branch => write!(f, "branch"),
            NodeKind::End => write!(f, "end"),
        }
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action" => Ok(NodeKind::Action),
            "branch" => Ok(NodeKind::Branch),
            "end" => Ok(NodeKind::End),
            other => Err(format!("unknown node kind '{other}'")),
        }
    }
}

/// Named child slot of a branch node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSlot {
    True,
    False,
}

impl FromStr for BranchSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(BranchSlot::True),
            "false" => Ok(BranchSlot::False),
            other => Err(format!("unknown branch slot '{other}'")),
        }
    }
}

/// Kind-dependent children shape. Each parent exclusively owns its subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// At most one follow-up step.
    Action { next: Option<Box<Node>> },
    /// Two named slots; either may be empty.
    Branch {
        on_true: Option<Box<Node>>,
        on_false: Option<Box<Node>>,
    },
    /// Terminal, no children.
    End,
}

/// One workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Opaque unique identifier, stable for the node's lifetime.
    pub id: String,
    /// Human-readable label, freely mutable.
    pub label: String,
    /// Kind-dependent children shape.
    pub children: Children,
}

impl Node {
    /// New node with a fresh unique id and the kind-derived default label.
    pub fn new(kind: NodeKind) -> Self {
        Self::with_label(kind, kind.default_label())
    }

    /// New node with a fresh unique id and an explicit label.
    pub fn with_label(kind: NodeKind, label: impl Into<String>) -> Self {
        Self::with_id(kind, label, fresh_id())
    }

    /// New node with an explicit id (root construction, tests).
    pub fn with_id(kind: NodeKind, label: impl Into<String>, id: impl Into<String>) -> Self {
        let children = match kind {
            NodeKind::Action => Children::Action { next: None },
            NodeKind::Branch => Children::Branch {
                on_true: None,
                on_false: None,
            },
            NodeKind::End => Children::End,
        };
        Self {
            id: id.into(),
            label: label.into(),
            children,
        }
    }

    /// Kind of this node, derived from the children shape so the two can
    /// never disagree.
    pub fn kind(&self) -> NodeKind {
        match self.children {
            Children::Action { .. } => NodeKind::Action,
            Children::Branch { .. } => NodeKind::Branch,
            Children::End => NodeKind::End,
        }
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_ID
    }

    /// Immediate children in traversal order (branch: true side first).
    pub fn child_nodes<'a>(&'a self) -> impl Iterator<Item = &'a Node> {
        let slots: [Option<&'a Node>; 2] = match &self.children {
            Children::Action { next } => [next.as_deref(), None],
            Children::Branch { on_true, on_false } => {
                [on_true.as_deref(), on_false.as_deref()]
            }
            Children::End => [None, None],
        };
        slots.into_iter().flatten()
    }

    pub(crate) fn child_nodes_mut<'a>(&'a mut self) -> impl Iterator<Item = &'a mut Node> {
        let slots: [Option<&'a mut Node>; 2] = match &mut self.children {
            Children::Action { next } => [next.as_deref_mut(), None],
            Children::Branch { on_true, on_false } => {
                [on_true.as_deref_mut(), on_false.as_deref_mut()]
            }
            Children::End => [None, None],
        };
        slots.into_iter().flatten()
    }

    /// Depth-first iterator over the whole subtree, this node first.
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter { stack: vec![self] }
    }
}

/// Fresh process-unique node id. The scheme carries no semantic meaning;
/// a collision would be a defect in the generator, not a runtime condition.
fn fresh_id() -> String {
    format!("node_{}", Uuid::new_v4().simple())
}

pub struct TreeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push in reverse so the true side comes out first
        let children: Vec<&Node> = node.child_nodes().collect();
        for child in children.into_iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

// Export shape: field order id, kind, label, children. Branch children
// serialize as an object keyed "true"/"false"; end nodes carry no
// children field at all.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = match self.children {
            Children::End => 3,
            _ => 4,
        };
        let mut state = serializer.serialize_struct("Node", fields)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("label", &self.label)?;
        match &self.children {
            Children::Action { next } => state.serialize_field("children", next)?,
            Children::Branch { on_true, on_false } => state.serialize_field(
                "children",
                &BranchChildren {
                    on_true: on_true.as_deref(),
                    on_false: on_false.as_deref(),
                },
            )?,
            Children::End => {}
        }
        state.end()
    }
}

#[derive(serde::Serialize)]
struct BranchChildren<'a> {
    #[serde(rename = "true")]
    on_true: Option<&'a Node>,
    #[serde(rename = "false")]
    on_false: Option<&'a Node>,
}
