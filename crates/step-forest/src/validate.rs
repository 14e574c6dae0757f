//! Structural invariant checks.

use std::fmt::Debug;

use thiserror::Error;

use crate::tree::RawTree;
use crate::types::KvNode;
use crate::util::{first, next, size};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root {key} has a parent")]
    RootHasParent { key: String },
    #[error("{side} child of {key} does not point back at it")]
    BrokenParentLink { key: String, side: &'static str },
    #[error("keys out of order: {prev} is not below {next}")]
    OrderViolated { prev: String, next: String },
    #[error("{reachable} nodes reachable from the root, {stored} stored")]
    CountMismatch { reachable: usize, stored: usize },
    #[error("height of {key} is {actual}, expected {expected}")]
    HeightMismatch {
        key: String,
        expected: i32,
        actual: i32,
    },
    #[error("{key} is out of balance by {balance}")]
    Unbalanced { key: String, balance: i32 },
}

fn show<K: Debug>(key: &K) -> String {
    format!("{key:?}")
}

/// Checks parent links, strict in-order key order, the node count, and for
/// nodes that store a height, the height formula and AVL balance.
pub fn check<K, V, N>(tree: &RawTree<K, V, N>) -> Result<(), InvariantError>
where
    K: Ord + Clone + Debug,
    N: KvNode<K, V>,
{
    let Some(root) = tree.root() else {
        return match tree.len() {
            0 => Ok(()),
            stored => Err(InvariantError::CountMismatch {
                reachable: 0,
                stored,
            }),
        };
    };

    if tree.parent(root).is_some() {
        return Err(InvariantError::RootHasParent {
            key: show(tree.key(root)),
        });
    }

    let arena = tree.arena();
    let reachable = size(arena, Some(root));
    if reachable != tree.len() {
        return Err(InvariantError::CountMismatch {
            reachable,
            stored: tree.len(),
        });
    }

    fn links_and_heights<K, V, N>(tree: &RawTree<K, V, N>, idx: u32) -> Result<i32, InvariantError>
    where
        K: Ord + Clone + Debug,
        N: KvNode<K, V>,
    {
        let mut heights = [0, 0];
        for (slot, (child, side)) in [(tree.left(idx), "left"), (tree.right(idx), "right")]
            .into_iter()
            .enumerate()
        {
            if let Some(c) = child {
                if tree.parent(c) != Some(idx) {
                    return Err(InvariantError::BrokenParentLink {
                        key: show(tree.key(idx)),
                        side,
                    });
                }
                heights[slot] = links_and_heights(tree, c)?;
            }
        }

        let expected = 1 + heights[0].max(heights[1]);
        if let Some(actual) = tree.node(idx).stored_height() {
            if actual != expected {
                return Err(InvariantError::HeightMismatch {
                    key: show(tree.key(idx)),
                    expected,
                    actual,
                });
            }
            let balance = heights[0] - heights[1];
            if balance.abs() > 1 {
                return Err(InvariantError::Unbalanced {
                    key: show(tree.key(idx)),
                    balance,
                });
            }
        }
        Ok(expected)
    }

    links_and_heights(tree, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(p) = prev {
            if tree.key(p) >= tree.key(i) {
                return Err(InvariantError::OrderViolated {
                    prev: show(tree.key(p)),
                    next: show(tree.key(i)),
                });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
