//! Arena-based ordered maps that narrate their own algorithms.
//!
//! Three interchangeable variants share one node shape and one contract
//! ([`OrderedTree`]):
//!
//! - [`BinarySearchTree`]: unbalanced.
//! - [`AvlTree`]: height-balanced, rebalanced by rotations.
//! - [`SplayTree`]: self-adjusting, splays every touched node to the root.
//!
//! Nodes live in a `Vec` arena and link to each other with `Option<u32>`
//! indices, so rotations and swaps are plain index surgery. Every primitive
//! structural action (visit, attach, swap, splice, rotation, height update,
//! splay) is reported as a [`Step`] to an optional [`Observer`], in the exact
//! order it happens, so a renderer can replay an operation step by step
//! without owning any tree logic. [`Snapshot`] gives that renderer a detached
//! copy of the shape to draw.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KvNode`] traits |
//! [`util`] | link surgery: walks, splice, rotations, [`util::swap`] |
//! [`tree`] | [`RawTree`], the shared base engine |
//! [`bst`], [`avl`], [`splay`] | the three variants |
//! [`step`] | [`Step`], [`Observer`] |
//! [`kind`] | [`TreeKind`], [`AnyTree`] |
//! [`snapshot`], [`validate`] | detached copies and invariant checks |

pub mod avl;
pub mod bst;
pub mod kind;
pub mod node;
pub mod ordered;
pub mod snapshot;
pub mod splay;
pub mod step;
pub mod tree;
pub mod types;
pub mod util;
pub mod validate;

pub use avl::{AvlNode, AvlTree};
pub use bst::BinarySearchTree;
pub use kind::{AnyTree, ParseTreeKindError, TreeKind};
pub use node::TreeNode;
pub use ordered::OrderedTree;
pub use snapshot::{Snapshot, SnapshotNode};
pub use splay::SplayTree;
pub use step::{Direction, Observer, Silent, Step};
pub use tree::{Probe, RawTree, Upsert};
pub use types::{KvNode, Node};
pub use validate::InvariantError;
