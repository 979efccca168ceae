//! Linear undo/redo history over tree snapshots.

use crate::domain::node::Node;

/// Ordered snapshots with a cursor marking the active one.
///
/// Every entry is an independently owned tree: the mutation engine always
/// hands `commit` a freshly built value, so no two snapshots can ever alias
/// mutable node data.
#[derive(Debug)]
pub struct History {
    entries: Vec<Node>,
    cursor: usize,
}

impl History {
    pub fn new(initial: Node) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// The active snapshot.
    pub fn current(&self) -> &Node {
        &self.entries[self.cursor]
    }

    /// Append a snapshot, discarding any redo entries beyond the cursor
    /// first. Committing after an undo permanently abandons the undone
    /// future; the history never branches.
    pub fn commit(&mut self, tree: Node) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(tree);
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor back one snapshot. No-op at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor forward one snapshot. No-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 == self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
