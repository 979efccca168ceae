//! Edit-script parsing.
//!
//! One command per line:
//!
//! ```text
//! insert <parent-ref> <action|branch|end> [true|false] [as <name>]
//! relabel <node-ref> <label...>
//! delete <node-ref>
//! undo
//! redo
//! ```
//!
//! Lines whose first non-blank character is `#` are comments; blank lines
//! are skipped. A `<ref>` is `start`, a name bound with `as`, or a raw node
//! id. The relabel label is everything after the single separator following
//! the target, taken verbatim (it may be empty, contain inner spaces, or
//! end in whitespace).

use crate::cli::error::{CliError, CliResult};
use crate::domain::{BranchSlot, NodeKind};

/// One parsed command with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Insert {
        parent: String,
        kind: NodeKind,
        slot: Option<BranchSlot>,
        name: Option<String>,
    },
    Relabel {
        target: String,
        label: String,
    },
    Delete {
        target: String,
    },
    Undo,
    Redo,
}

pub fn parse_script(input: &str) -> CliResult<Vec<ScriptLine>> {
    let mut commands = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        // Strip only the line ending; trailing spaces belong to the line
        // (a relabel label may end in whitespace).
        let text = raw.strip_suffix('\r').unwrap_or(raw).trim_start();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let command = parse_command(text).map_err(|message| CliError::Parse { line, message })?;
        commands.push(ScriptLine { line, command });
    }
    Ok(commands)
}

fn parse_command(text: &str) -> Result<ScriptCommand, String> {
    let mut words = text.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };

    match verb {
        "insert" => {
            let parent = words
                .next()
                .ok_or("insert needs a parent reference")?
                .to_string();
            let kind: NodeKind = words.next().ok_or("insert needs a node kind")?.parse()?;
            let mut rest: Vec<&str> = words.collect();

            let slot = match rest.first().map(|w| w.parse::<BranchSlot>()) {
                Some(Ok(parsed)) => {
                    rest.remove(0);
                    Some(parsed)
                }
                _ => None,
            };

            let name = match rest.as_slice() {
                [] => None,
                ["as", n] => Some((*n).to_string()),
                _ => return Err(format!("unexpected trailing words: {}", rest.join(" "))),
            };

            Ok(ScriptCommand::Insert {
                parent,
                kind,
                slot,
                name,
            })
        }
        "relabel" => {
            // label = everything after the single separator behind the
            // target, verbatim
            let rest = text["relabel".len()..].trim_start();
            let (target, label) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            if target.is_empty() {
                return Err("relabel needs a node reference".to_string());
            }
            Ok(ScriptCommand::Relabel {
                target: target.to_string(),
                label: label.to_string(),
            })
        }
        "delete" => {
            let target = words
                .next()
                .ok_or("delete needs a node reference")?
                .to_string();
            if words.next().is_some() {
                return Err("delete takes exactly one reference".to_string());
            }
            Ok(ScriptCommand::Delete { target })
        }
        "undo" => {
            if words.next().is_some() {
                return Err("undo takes no arguments".to_string());
            }
            Ok(ScriptCommand::Undo)
        }
        "redo" => {
            if words.next().is_some() {
                return Err("redo takes no arguments".to_string());
            }
            Ok(ScriptCommand::Redo)
        }
        other => Err(format!("unknown command '{other}'")),
    }
}
