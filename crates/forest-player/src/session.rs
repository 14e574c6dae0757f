//! A tree plus a serialized command queue.
//!
//! Commands are queued and executed strictly one after another, each to
//! completion, so a renderer can never observe two interleaved operations.
//! Every executed command yields an [`Outcome`] holding a snapshot of the
//! tree taken after the command finished.

use std::collections::VecDeque;

use serde::Serialize;
use step_forest::{AnyTree, Observer, Silent, Snapshot, TreeKind};

use crate::command::{Command, CommandError};
use crate::config::PlayerConfig;

/// Result of one executed command.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub command: Command,
    /// Variant the command ran against.
    pub kind: TreeKind,
    pub message: String,
    pub snapshot: Snapshot<i64, i64>,
}

#[derive(Clone, Debug)]
pub struct Session {
    tree: AnyTree<i64, i64>,
    config: PlayerConfig,
    queue: VecDeque<Command>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl Session {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            tree: AnyTree::new(config.kind),
            config,
            queue: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> TreeKind {
        self.tree.kind()
    }

    pub fn tree(&self) -> &AnyTree<i64, i64> {
        &self.tree
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Number of commands waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn enqueue(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Parses and enqueues one line. Nothing is queued on error.
    pub fn enqueue_line(&mut self, line: &str) -> Result<(), CommandError> {
        let command = line.parse()?;
        self.enqueue(command);
        Ok(())
    }

    /// Runs the oldest queued command, feeding its steps to `obs`.
    pub fn step<O>(&mut self, obs: &mut O) -> Option<Outcome>
    where
        O: Observer<i64> + ?Sized,
    {
        let command = self.queue.pop_front()?;
        Some(self.execute(command, obs))
    }

    /// Drains the queue in order.
    pub fn run_pending<O>(&mut self, obs: &mut O) -> Vec<Outcome>
    where
        O: Observer<i64> + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(self.queue.len());
        while let Some(outcome) = self.step(obs) {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Runs `command` immediately, bypassing the queue.
    pub fn execute<O>(&mut self, command: Command, obs: &mut O) -> Outcome
    where
        O: Observer<i64> + ?Sized,
    {
        let kind = self.kind();
        tracing::debug!(%command, %kind, len = self.tree.len(), "executing");

        let mut reset = false;
        let message = match command {
            Command::Insert(key) => {
                self.tree.insert_with(key, key, obs);
                format!("Inserted {key}")
            }
            Command::Remove(key) => match self.tree.remove_with(&key, obs) {
                None => format!("Node with key {key} not found!"),
                Some(_) if self.tree.is_empty() => {
                    reset = self.config.reset_when_empty;
                    format!("Removed {key}. Tree is now empty.")
                }
                Some(_) => format!("Removed {key}"),
            },
            Command::Find(key) => match self.tree.find_with(&key, obs) {
                Some(_) => format!("Node with key {key} found!"),
                None => format!("Node with key {key} not found!"),
            },
            Command::Min => match self.tree.find_min_with(obs) {
                Some((k, _)) => format!("Minimum key is {k}"),
                None => "Tree is empty".to_string(),
            },
            Command::Max => match self.tree.find_max_with(obs) {
                Some((k, _)) => format!("Maximum key is {k}"),
                None => "Tree is empty".to_string(),
            },
            Command::Restart => {
                self.tree = AnyTree::new(kind);
                format!("Started a new {}", kind.label())
            }
            Command::Select(next) => {
                self.tree = AnyTree::new(next);
                self.config.kind = next;
                format!("Selected {}", next.label())
            }
        };

        let snapshot = self.tree.snapshot();
        if reset {
            tracing::debug!(%kind, "tree emptied, starting fresh");
            self.tree = AnyTree::new(kind);
        }
        if let Err(err) = self.tree.assert_valid() {
            tracing::error!(%command, %err, "tree invariant broken");
        }

        Outcome {
            command,
            kind,
            message,
            snapshot,
        }
    }

    /// Runs `command` without observing it.
    pub fn execute_silent(&mut self, command: Command) -> Outcome {
        self.execute(command, &mut Silent)
    }
}
