//! Application layer: editor session orchestration and export.

pub mod error;
pub mod export;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use session::EditorSession;
