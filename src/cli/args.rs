//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Branching workflow tree editor: typed nodes, splice-preserving edits, undo/redo
#[derive(Parser, Debug)]
#[command(name = "flowedit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply an edit script to a fresh workflow and print the result
    Apply {
        /// Script file ("-" reads stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,

        /// Print the JSON export instead of the tree view
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
