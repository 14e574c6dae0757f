//! Step recording for renderers.
//!
//! A [`TraceRecorder`] is an [`Observer`] that turns the engine's step stream
//! into numbered [`Frame`]s, each carrying the node a renderer should
//! highlight while showing that step.

use serde::Serialize;
use step_forest::{Observer, Step};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame<K> {
    /// Position in the recording, from 0.
    pub seq: usize,
    pub step: Step<K>,
    pub highlight: Option<K>,
}

/// Key to highlight for a step: the subject of a visit, a hit, a splay or a
/// rotation. Every other step clears the highlight.
pub fn highlight_of<K: Clone>(step: &Step<K>) -> Option<K> {
    match step {
        Step::Visit { key }
        | Step::Found { key }
        | Step::Splay { key }
        | Step::RotateLeft { key }
        | Step::RotateRight { key } => Some(key.clone()),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct TraceRecorder<K> {
    frames: Vec<Frame<K>>,
    next_seq: usize,
}

impl<K> Default for TraceRecorder<K> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K> TraceRecorder<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame<K>] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drains the recorded frames. Sequence numbers keep counting.
    pub fn take(&mut self) -> Vec<Frame<K>> {
        std::mem::take(&mut self.frames)
    }

    /// Drops the frames and restarts numbering.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.next_seq = 0;
    }

    /// One JSON object per line.
    pub fn to_json_lines(&self) -> Result<String, serde_json::Error>
    where
        K: Serialize,
    {
        let mut out = String::new();
        for frame in &self.frames {
            out.push_str(&serde_json::to_string(frame)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl<K: Clone> Observer<K> for TraceRecorder<K> {
    fn on_step(&mut self, step: Step<K>) {
        let highlight = highlight_of(&step);
        self.frames.push(Frame {
            seq: self.next_seq,
            step,
            highlight,
        });
        self.next_seq += 1;
    }
}
