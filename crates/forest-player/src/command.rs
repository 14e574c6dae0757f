//! Text commands accepted by a [`Session`](crate::Session).
//!
//! One command per line:
//!
//! ```text
//! insert <key>
//! remove <key>      (alias: delete)
//! find <key>
//! min
//! max
//! restart
//! select <bst|avl|splay>
//! ```
//!
//! Keys are signed 64-bit integers. Anything else is rejected here, before
//! it can reach a tree.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use step_forest::{ParseTreeKindError, TreeKind};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert `key` with the key itself as the value.
    Insert(i64),
    Remove(i64),
    Find(i64),
    Min,
    Max,
    /// Replace the tree with a fresh empty one of the same kind.
    Restart,
    /// Replace the tree with a fresh empty one of another kind.
    Select(TreeKind),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingKey(&'static str),
    #[error("`{0}` is not an integer key")]
    InvalidKey(String),
    #[error(transparent)]
    UnknownKind(#[from] ParseTreeKindError),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

impl Command {
    /// Verb as written on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert(_) => "insert",
            Command::Remove(_) => "remove",
            Command::Find(_) => "find",
            Command::Min => "min",
            Command::Max => "max",
            Command::Restart => "restart",
            Command::Select(_) => "select",
        }
    }

    /// Key the command targets, if any.
    pub fn key(&self) -> Option<i64> {
        match *self {
            Command::Insert(k) | Command::Remove(k) | Command::Find(k) => Some(k),
            _ => None,
        }
    }
}

fn parse_key(verb: &'static str, arg: Option<&str>) -> Result<i64, CommandError> {
    let arg = arg.ok_or(CommandError::MissingKey(verb))?;
    arg.parse()
        .map_err(|_| CommandError::InvalidKey(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let arg = words.next();

        let verb = verb.to_ascii_lowercase();
        let command = match verb.as_str() {
            "insert" => Command::Insert(parse_key("insert", arg)?),
            "remove" | "delete" => Command::Remove(parse_key("remove", arg)?),
            "find" => Command::Find(parse_key("find", arg)?),
            "select" => {
                let kind = arg.ok_or(CommandError::MissingKey("select"))?;
                Command::Select(kind.parse()?)
            }
            "min" => Command::Min,
            "max" => Command::Max,
            "restart" => Command::Restart,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        let extra = match command {
            Command::Min | Command::Max | Command::Restart => arg,
            _ => words.next(),
        };
        match extra {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Select(kind) => write!(f, "select {kind}"),
            c => match c.key() {
                Some(k) => write!(f, "{} {k}", c.name()),
                None => f.write_str(c.name()),
            },
        }
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
