//! Core logic behind the `forest-player` binary.
//!
//! A script is plain text, one [`Command`](crate::Command) per line. Blank
//! lines and lines starting with `#` are skipped. Each executed command
//! produces one JSON line: the [`Outcome`] fields, plus the recorded frames
//! when [`PlayerConfig::emit_trace`] is set.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::command::CommandError;
use crate::config::{ConfigError, PlayerConfig};
use crate::session::{Outcome, Session};
use crate::trace::{Frame, TraceRecorder};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: CommandError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// ── Reports ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    outcome: &'a Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    frames: Option<&'a [Frame<i64>]>,
}

/// Renders one outcome as a single JSON line (no trailing newline).
pub fn render_report(outcome: &Outcome, frames: Option<&[Frame<i64>]>) -> Result<String, PlayerError> {
    Ok(serde_json::to_string(&Report { outcome, frames })?)
}

// ── Scripts ───────────────────────────────────────────────────────────────

/// Runs a whole script against a fresh session and returns the JSON lines.
///
/// Every line is parsed before anything runs, so a malformed script
/// produces no output at all.
pub fn play(script: &str, config: PlayerConfig) -> Result<String, PlayerError> {
    let emit_trace = config.emit_trace;
    let mut session = Session::new(config);

    for (i, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        session
            .enqueue_line(line)
            .map_err(|source| PlayerError::Command { line: i + 1, source })?;
    }

    let mut recorder: TraceRecorder<i64> = TraceRecorder::new();
    let mut out = String::new();
    while let Some(outcome) = session.step(&mut recorder) {
        let frames = recorder.take();
        let frames = emit_trace.then_some(frames.as_slice());
        out.push_str(&render_report(&outcome, frames)?);
        out.push('\n');
    }
    tracing::debug!(kind = %session.kind(), len = session.tree().len(), "script finished");
    Ok(out)
}

/// Resolves the configuration (file, then `FOREST_KIND`) and plays `script`.
pub fn run(script: &str, config_path: Option<&Path>) -> Result<String, PlayerError> {
    let config = PlayerConfig::resolve(config_path)?;
    play(script, config)
}
