//! Instrumentation protocol.
//!
//! Every structural action an engine takes is published as a [`Step`] to a
//! single [`Observer`] before the engine moves on. Observers run inline, so
//! an observer that blocks (for example to pace an animation) holds the
//! operation at exactly that step.
//!
//! Steps serialize as internally tagged objects, e.g.
//! `{"type":"insert","key":4,"parentKey":3,"direction":"right"}`.

use std::fmt::Debug;

use serde::Serialize;

/// Which child slot a node was attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// One primitive structural action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Step<K> {
    /// Node examined during a descent.
    Visit { key: K },
    /// New node attached. `parent_key` is `None` for a new root.
    Insert {
        key: K,
        #[serde(rename = "parentKey")]
        parent_key: Option<K>,
        #[serde(skip_serializing_if = "Option::is_none")]
        direction: Option<Direction>,
    },
    /// Existing key's value overwritten in place.
    Update { key: K },
    Found { key: K },
    NotFound { key: K },
    /// Two nodes are about to exchange positions ahead of a deletion.
    Swap { key1: K, key2: K },
    /// Node about to be spliced out.
    Remove { key: K },
    /// Rotation about `key` (the pivot) is about to happen.
    RotateLeft { key: K },
    RotateRight { key: K },
    /// AVL height recomputed.
    UpdateHeight { key: K, height: i32 },
    /// Splay toward the root is starting.
    Splay { key: K },
}

impl<K> Step<K> {
    /// Wire name of the step kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Visit { .. } => "visit",
            Step::Insert { .. } => "insert",
            Step::Update { .. } => "update",
            Step::Found { .. } => "found",
            Step::NotFound { .. } => "not-found",
            Step::Swap { .. } => "swap",
            Step::Remove { .. } => "remove",
            Step::RotateLeft { .. } => "rotate-left",
            Step::RotateRight { .. } => "rotate-right",
            Step::UpdateHeight { .. } => "update-height",
            Step::Splay { .. } => "splay",
        }
    }

    /// The key the step is about. For [`Step::Swap`] this is the node being
    /// deleted.
    pub fn key(&self) -> &K {
        match self {
            Step::Visit { key }
            | Step::Insert { key, .. }
            | Step::Update { key }
            | Step::Found { key }
            | Step::NotFound { key }
            | Step::Remove { key }
            | Step::RotateLeft { key }
            | Step::RotateRight { key }
            | Step::UpdateHeight { key, .. }
            | Step::Splay { key } => key,
            Step::Swap { key1, .. } => key1,
        }
    }
}

/// Receiver of the step trace.
pub trait Observer<K> {
    fn on_step(&mut self, step: Step<K>);
}

impl<K, F> Observer<K> for F
where
    F: FnMut(Step<K>),
{
    fn on_step(&mut self, step: Step<K>) {
        self(step)
    }
}

/// Observer that discards every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<K> Observer<K> for Silent {
    fn on_step(&mut self, _step: Step<K>) {}
}

/// Observer that appends every step to a vector.
impl<K> Observer<K> for Vec<Step<K>> {
    fn on_step(&mut self, step: Step<K>) {
        self.push(step);
    }
}

#[inline]
pub(crate) fn emit<K, O>(obs: &mut O, step: Step<K>)
where
    K: Debug,
    O: Observer<K> + ?Sized,
{
    tracing::trace!(?step, "step");
    obs.on_step(step);
}
