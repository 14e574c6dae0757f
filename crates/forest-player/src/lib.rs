//! Drives [`step_forest`] trees from text commands.
//!
//! - [`command`]: parsing of `insert 5`, `remove 5`, `select avl`, ...
//! - [`session`]: the selected tree and its serialized command queue.
//! - [`trace`]: an observer that records numbered, highlighted frames.
//! - [`config`]: TOML configuration with an environment override.
//! - [`cli`]: script execution behind the `forest-player` binary.

pub mod cli;
pub mod command;
pub mod config;
pub mod session;
pub mod trace;

pub use cli::{play, run, PlayerError};
pub use command::{Command, CommandError};
pub use config::{ConfigError, PlayerConfig};
pub use session::{Outcome, Session};
pub use trace::{highlight_of, Frame, TraceRecorder};
