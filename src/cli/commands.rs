//! Command execution: the script driver behind `flowedit apply`.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::EditorSession;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render;
use crate::cli::script::{parse_script, ScriptCommand, ScriptLine};
use crate::domain::locate;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Apply { script, json }) => apply(script, *json),
        Some(Commands::Completion { shell }) => {
            completions(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

fn completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[instrument]
fn apply(script_path: &Path, json: bool) -> CliResult<()> {
    let source = if script_path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(script_path)?
    };

    let commands = parse_script(&source)?;
    debug!("parsed {} commands", commands.len());

    let mut session = EditorSession::new();
    run_script(&mut session, &commands)?;

    if json {
        output::info(&session.export_tree()?);
    } else {
        output::info(&render::workflow_tree(session.current_tree()));
    }
    Ok(())
}

/// Apply parsed commands to a session, in order.
///
/// Names bound with `as` resolve to the generated node ids. A reference
/// that is neither a bound name nor an id present in the current tree is a
/// hard error; requests the engine ignores (no-op policy) print a warning
/// and execution continues.
pub fn run_script(session: &mut EditorSession, commands: &[ScriptLine]) -> CliResult<()> {
    let mut names: HashMap<String, String> = HashMap::new();

    for entry in commands {
        match &entry.command {
            ScriptCommand::Insert {
                parent,
                kind,
                slot,
                name,
            } => {
                let parent_id = resolve(session, &names, parent, entry.line)?;
                match session.request_insert(&parent_id, *kind, *slot) {
                    Some(node_id) => {
                        debug!(line = entry.line, %node_id, "inserted");
                        if let Some(name) = name {
                            names.insert(name.clone(), node_id);
                        }
                    }
                    None => output::warning(&format!("line {}: insert ignored", entry.line)),
                }
            }
            ScriptCommand::Relabel { target, label } => {
                let node_id = resolve(session, &names, target, entry.line)?;
                if !session.request_relabel(&node_id, label) {
                    output::warning(&format!("line {}: relabel ignored", entry.line));
                }
            }
            ScriptCommand::Delete { target } => {
                let node_id = resolve(session, &names, target, entry.line)?;
                if !session.request_delete(&node_id) {
                    output::warning(&format!("line {}: delete ignored", entry.line));
                }
            }
            ScriptCommand::Undo => {
                if !session.undo() {
                    output::warning(&format!("line {}: nothing to undo", entry.line));
                }
            }
            ScriptCommand::Redo => {
                if !session.redo() {
                    output::warning(&format!("line {}: nothing to redo", entry.line));
                }
            }
        }
    }
    Ok(())
}

fn resolve(
    session: &EditorSession,
    names: &HashMap<String, String>,
    reference: &str,
    line: usize,
) -> CliResult<String> {
    if let Some(id) = names.get(reference) {
        return Ok(id.clone());
    }
    if locate(session.current_tree(), reference).is_some() {
        return Ok(reference.to_string());
    }
    Err(CliError::UnknownRef {
        line,
        name: reference.to_string(),
    })
}
