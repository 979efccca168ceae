//! Editor session: dispatches edit intents to the mutation engine and
//! commits the results to history.
//!
//! The current tree is always the active history snapshot; it is never
//! mutated in place, so past and future snapshots cannot be corrupted.

use tracing::{debug, instrument};

use crate::application::error::ApplicationResult;
use crate::application::export;
use crate::domain::{mutate, BranchSlot, History, Node, NodeKind, ROOT_ID};

pub struct EditorSession {
    history: History,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Fresh session holding the conventional root: an action node with the
    /// reserved id and the label "Start".
    pub fn new() -> Self {
        let root = Node::with_id(NodeKind::Action, "Start", ROOT_ID);
        Self {
            history: History::new(root),
        }
    }

    /// Read-only snapshot of the active tree, for rendering.
    pub fn current_tree(&self) -> &Node {
        self.history.current()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Insert a new node of `kind` under `parent_id`, splicing the parent's
    /// existing subtree below it. Returns the new node's id, or `None` when
    /// the engine ignored the request (nothing committed).
    #[instrument(level = "debug", skip(self))]
    pub fn request_insert(
        &mut self,
        parent_id: &str,
        kind: NodeKind,
        slot: Option<BranchSlot>,
    ) -> Option<String> {
        let node = Node::new(kind);
        let node_id = node.id.clone();
        let next = mutate::insert(self.current_tree(), parent_id, node, slot)?;
        self.history.commit(next);
        Some(node_id)
    }

    /// Delete the node with `node_id`. True iff the tree changed.
    #[instrument(level = "debug", skip(self))]
    pub fn request_delete(&mut self, node_id: &str) -> bool {
        match mutate::delete(self.current_tree(), node_id) {
            Some(next) => {
                self.history.commit(next);
                true
            }
            None => false,
        }
    }

    /// Replace the label of the node with `node_id` verbatim. True iff the
    /// tree changed.
    #[instrument(level = "debug", skip(self))]
    pub fn request_relabel(&mut self, node_id: &str, label: &str) -> bool {
        match mutate::relabel(self.current_tree(), node_id, label) {
            Some(next) => {
                self.history.commit(next);
                true
            }
            None => false,
        }
    }

    /// Step back one snapshot. No-op at the oldest state.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        debug!(moved, cursor = self.history.cursor(), "undo");
        moved
    }

    /// Step forward one snapshot. No-op at the newest state.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        debug!(moved, cursor = self.history.cursor(), "redo");
        moved
    }

    /// Serialize the current tree to the persistence format.
    pub fn export_tree(&self) -> ApplicationResult<String> {
        export::to_json(self.current_tree())
    }
}
