//! CLI layer: argument parsing, script driver, terminal output.

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod render;
pub mod script;

pub use error::{CliError, CliResult};
