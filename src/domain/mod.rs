//! Domain layer: the workflow tree and its mutation engine.
//!
//! Independent of presentation and persistence concerns.

pub mod history;
pub mod locate;
pub mod mutate;
pub mod node;

pub use history::History;
pub use locate::{locate, Located, Slot};
pub use node::{BranchSlot, Children, Node, NodeKind, ROOT_ID};
