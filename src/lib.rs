//! flowedit: a branching workflow tree editor.
//!
//! The domain layer holds the tree model, locator, mutation engine and
//! undo/redo history; the application layer orchestrates them behind an
//! [`EditorSession`]; the cli layer is a thin script-driven presentation
//! collaborator.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{ApplicationError, EditorSession};
pub use domain::{locate, BranchSlot, Children, History, Located, Node, NodeKind, Slot, ROOT_ID};
