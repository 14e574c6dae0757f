//! Self-adjusting (splay) tree.
//!
//! Every find, insert and remove ends by splaying the most recently touched
//! node to the root with zig / zig-zig / zig-zag rotations. A failed find
//! splays the last node visited; a removal splays the parent the removed node
//! had before any predecessor swap.

use std::fmt::Debug;

use crate::node::TreeNode;
use crate::ordered::OrderedTree;
use crate::step::{emit, Direction, Observer, Step};
use crate::tree::{Probe, RawTree, Upsert};

/// Self-adjusting binary search tree.
#[derive(Clone, Debug)]
pub struct SplayTree<K, V> {
    raw: RawTree<K, V, TreeNode<K, V>>,
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self {
            raw: RawTree::default(),
        }
    }
}

impl<K, V> SplayTree<K, V>
where
    K: Ord + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotates `n` up until it becomes the root.
    pub fn splay<O>(&mut self, n: u32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        emit(obs, Step::Splay { key: self.raw.key(n).clone() });
        let mut rotations = 0usize;
        while let Some(p) = self.raw.parent(n) {
            let n_is_left = self.raw.left(p) == Some(n);
            match self.raw.parent(p) {
                // zig
                None => {
                    if n_is_left {
                        self.raw.rotate_right(p, obs);
                    } else {
                        self.raw.rotate_left(p, obs);
                    }
                    rotations += 1;
                }
                Some(g) => {
                    let p_is_left = self.raw.left(g) == Some(p);
                    match (p_is_left, n_is_left) {
                        // zig-zig: grandparent first
                        (true, true) => {
                            self.raw.rotate_right(g, obs);
                            self.raw.rotate_right(p, obs);
                        }
                        (false, false) => {
                            self.raw.rotate_left(g, obs);
                            self.raw.rotate_left(p, obs);
                        }
                        // zig-zag: parent first
                        (false, true) => {
                            self.raw.rotate_right(p, obs);
                            self.raw.rotate_left(g, obs);
                        }
                        (true, false) => {
                            self.raw.rotate_left(p, obs);
                            self.raw.rotate_right(g, obs);
                        }
                    }
                    rotations += 2;
                }
            }
        }
        tracing::trace!(key = ?self.raw.key(n), rotations, "splayed to root");
        debug_assert_eq!(self.raw.root(), Some(n));
    }
}

impl<K, V> OrderedTree<K, V> for SplayTree<K, V>
where
    K: Ord + Clone + Debug,
{
    type Node = TreeNode<K, V>;

    fn raw(&self) -> &RawTree<K, V, Self::Node> {
        &self.raw
    }

    fn raw_mut(&mut self) -> &mut RawTree<K, V, Self::Node> {
        &mut self.raw
    }

    fn insert_with<O>(&mut self, key: K, value: V, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        let was_empty = self.raw.is_empty();
        let n = match self.raw.upsert(key, value, obs) {
            Upsert::Inserted(_) if was_empty => return,
            touched => touched.index(),
        };
        self.splay(n, obs);
    }

    fn remove_with<O>(&mut self, key: &K, obs: &mut O) -> Option<V>
    where
        O: Observer<K> + ?Sized,
    {
        let Some(idx) = self.raw.locate(key) else {
            emit(obs, Step::NotFound { key: key.clone() });
            return None;
        };
        emit(obs, Step::Found { key: key.clone() });
        // Captured before any predecessor swap moves `idx` down the tree.
        let parent = self.raw.parent(idx);
        self.raw.detach(idx, obs);
        if let Some(parent) = parent {
            self.splay(parent, obs);
        }
        Some(self.raw.release(idx).1)
    }

    fn find_with<O>(&mut self, key: &K, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        match self.raw.probe(key, obs) {
            Probe::Found(n) => {
                emit(obs, Step::Found { key: key.clone() });
                self.splay(n, obs);
                Some(n)
            }
            Probe::Vacant { parent, .. } => {
                emit(obs, Step::NotFound { key: key.clone() });
                if let Some(last) = parent {
                    self.splay(last, obs);
                }
                None
            }
        }
    }

    fn find_min_with<O>(&mut self, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        let n = self.raw.find_extreme(Direction::Left, obs)?;
        self.splay(n, obs);
        Some(n)
    }

    fn find_max_with<O>(&mut self, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        let n = self.raw.find_extreme(Direction::Right, obs)?;
        self.splay(n, obs);
        Some(n)
    }
}
