//! Interactive command grammar
//!
//! Parsing is where empty task text gets rejected: an `add` or `edit` with
//! blank text never produces a command, so the store is never reached.

use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing an input line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("Unknown command: {0}. Type 'help' for a list.")]
    Unknown(String),
    #[error("'{0}' needs a task id")]
    MissingId(&'static str),
    #[error("Invalid task id: {0}")]
    InvalidId(String),
    #[error("Task text must not be empty")]
    EmptyText,
}

/// A parsed user gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Edit(u64, String),
    Delete(u64),
    Toggle(u64),
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "add" => {
                if rest.is_empty() {
                    Err(CommandError::EmptyText)
                } else {
                    Ok(Command::Add(rest.to_string()))
                }
            }
            "edit" => {
                let (id_part, text) = match rest.split_once(char::is_whitespace) {
                    Some((id, text)) => (id, text.trim()),
                    None => (rest, ""),
                };
                let id = parse_id(id_part, "edit")?;
                if text.is_empty() {
                    Err(CommandError::EmptyText)
                } else {
                    Ok(Command::Edit(id, text.to_string()))
                }
            }
            "delete" | "del" | "rm" => Ok(Command::Delete(parse_id(first_token(rest), "delete")?)),
            "toggle" | "done" => Ok(Command::Toggle(parse_id(first_token(rest), "toggle")?)),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn first_token(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

fn parse_id(s: &str, verb: &'static str) -> Result<u64, CommandError> {
    if s.is_empty() {
        return Err(CommandError::MissingId(verb));
    }
    s.parse()
        .map_err(|_| CommandError::InvalidId(s.to_string()))
}

/// Usage text for the interactive loop
pub const USAGE: &str = "\
Commands:
  add <text>        Add a new task
  edit <id> <text>  Replace a task's text
  toggle <id>       Flip a task's completion (alias: done)
  delete <id>       Remove a task (aliases: del, rm)
  list              Show the current tasks (alias: ls)
  help              Show this message
  quit              Exit (aliases: exit, q)";
