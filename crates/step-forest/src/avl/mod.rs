//! Height-balanced (AVL) tree.
//!
//! Every node stores the height of the subtree it roots. Insertion walks up
//! from the new node's parent, stops at the first ancestor whose height does
//! not change, and fixes at most one imbalance with a single or double
//! rotation. Deletion walks up from the spliced node's parent and may rotate
//! at every level up to the root.
//!
//! Every stored height that an insert or remove walk changes is reported as
//! an `update-height` step, the new leaf's parent growing from 1 to 2
//! included. Heights refreshed inside a rotation are not reported; the
//! rotation step stands for them.

pub mod types;

use std::fmt::Debug;

use crate::ordered::OrderedTree;
use crate::step::{emit, Observer, Step};
use crate::tree::{RawTree, Upsert};

pub use types::AvlNode;

/// Height-balanced binary search tree.
#[derive(Clone, Debug)]
pub struct AvlTree<K, V> {
    raw: RawTree<K, V, AvlNode<K, V>>,
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self {
            raw: RawTree::default(),
        }
    }
}

impl<K, V> AvlTree<K, V>
where
    K: Ord + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored height of the node at `idx`.
    pub fn height(&self, idx: u32) -> i32 {
        self.raw.node(idx).height
    }

    fn sub(&self, idx: Option<u32>) -> i32 {
        idx.map_or(0, |i| self.height(i))
    }

    fn child_heights(&self, idx: u32) -> (i32, i32) {
        (self.sub(self.raw.left(idx)), self.sub(self.raw.right(idx)))
    }

    /// Recomputes and stores the height of `idx` from its children.
    fn refresh(&mut self, idx: u32) -> i32 {
        let (lh, rh) = self.child_heights(idx);
        let h = 1 + lh.max(rh);
        self.raw.node_mut(idx).height = h;
        h
    }

    fn set_height<O>(&mut self, idx: u32, height: i32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        self.raw.node_mut(idx).height = height;
        emit(
            obs,
            Step::UpdateHeight {
                key: self.raw.key(idx).clone(),
                height,
            },
        );
    }

    /// Left rotation about `n`, refreshing the heights of `n`, the node that
    /// took its place, and that node's new parent.
    fn left_rotate<O>(&mut self, n: u32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        self.raw.rotate_left(n, obs);
        self.refresh_after_rotation(n);
    }

    fn right_rotate<O>(&mut self, n: u32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        self.raw.rotate_right(n, obs);
        self.refresh_after_rotation(n);
    }

    fn refresh_after_rotation(&mut self, n: u32) {
        self.refresh(n);
        if let Some(x) = self.raw.parent(n) {
            self.refresh(x);
            if let Some(p) = self.raw.parent(x) {
                self.refresh(p);
            }
        }
    }

    /// Upward height walk after attaching `n` under `p`, whose height has
    /// just changed.
    fn insert_fix<O>(&mut self, mut p: u32, mut n: u32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        while let Some(g) = self.raw.parent(p) {
            let (lh, rh) = self.child_heights(g);
            let height = 1 + lh.max(rh);
            if height == self.height(g) {
                return;
            }
            self.set_height(g, height, obs);

            if (lh - rh).abs() < 2 {
                n = p;
                p = g;
                continue;
            }

            tracing::trace!(key = ?self.raw.key(g), balance = lh - rh, "avl insert rebalance");
            let n_is_left = self.raw.left(p) == Some(n);
            let p_is_left = self.raw.left(g) == Some(p);
            match (p_is_left, n_is_left) {
                (true, true) => self.right_rotate(g, obs),
                (true, false) => {
                    self.left_rotate(p, obs);
                    self.right_rotate(g, obs);
                }
                (false, false) => self.left_rotate(g, obs),
                (false, true) => {
                    self.right_rotate(p, obs);
                    self.left_rotate(g, obs);
                }
            }
            return;
        }
    }

    /// Upward walk after a splice, starting at the spliced node's parent.
    fn remove_fix<O>(&mut self, start: Option<u32>, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        let mut curr = start;
        // Height an ancestor had before a rotation below it refreshed it.
        let mut carried: Option<i32> = None;
        while let Some(n) = curr {
            let (lh, rh) = self.child_heights(n);
            if (lh - rh).abs() > 1 {
                let p = self.raw.parent(n);
                carried = p.map(|p| self.height(p));
                self.rebalance(n, lh, rh, obs);
                curr = p;
                continue;
            }

            let before = carried.take().unwrap_or_else(|| self.height(n));
            let height = 1 + lh.max(rh);
            if height != self.height(n) {
                self.set_height(n, height, obs);
            }
            if height == before {
                return;
            }
            curr = self.raw.parent(n);
        }
    }

    /// Restores balance at `n` after a deletion.
    fn rebalance<O>(&mut self, n: u32, lh: i32, rh: i32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        tracing::trace!(key = ?self.raw.key(n), balance = lh - rh, "avl remove rebalance");
        let c_is_left = lh > rh;
        let c = if c_is_left {
            self.raw.left(n)
        } else {
            self.raw.right(n)
        };
        let Some(c) = c else {
            return;
        };

        let (gl, gr) = self.child_heights(c);
        let g_is_left = match gl.cmp(&gr) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            // Ties follow the child's own side so a single rotation suffices.
            std::cmp::Ordering::Equal => c_is_left,
        };

        match (c_is_left, g_is_left) {
            (true, true) => self.right_rotate(n, obs),
            (true, false) => {
                self.left_rotate(c, obs);
                self.right_rotate(n, obs);
            }
            (false, false) => self.left_rotate(n, obs),
            (false, true) => {
                self.right_rotate(c, obs);
                self.left_rotate(n, obs);
            }
        }
    }
}

impl<K, V> OrderedTree<K, V> for AvlTree<K, V>
where
    K: Ord + Clone + Debug,
{
    type Node = AvlNode<K, V>;

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
        let Upsert::Inserted(n) = self.raw.upsert(key, value, obs) else {
            return;
        };
        let Some(p) = self.raw.parent(n) else {
            return;
        };
        // Only a parent that was a leaf grows, and that growth is observed
        // like any other height change on the walk.
        if self.height(p) == 1 {
            self.set_height(p, 2, obs);
            self.insert_fix(p, n, obs);
        }
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
        let parent = self.raw.detach(idx, obs);
        self.remove_fix(parent, obs);
        Some(self.raw.release(idx).1)
    }

    fn find_with<O>(&mut self, key: &K, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        self.raw.find(key, obs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_inserts_rotate_left_once() {
        let mut tree = AvlTree::new();
        let mut steps: Vec<Step<i32>> = Vec::new();
        for k in [1, 2, 3] {
            tree.insert_with(k, k, &mut steps);
        }
        assert_eq!(tree.root_key(), Some(&2));
        assert!(steps.contains(&Step::RotateLeft { key: 1 }));
        let root = tree.root().unwrap();
        assert_eq!(tree.height(root), 2);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn zig_zag_insert_uses_double_rotation() {
        let mut tree = AvlTree::new();
        let mut steps: Vec<Step<i32>> = Vec::new();
        for k in [3, 1, 2] {
            tree.insert_with(k, (), &mut steps);
        }
        let rotations: Vec<_> = steps
            .iter()
            .filter(|s| s.kind().starts_with("rotate"))
            .cloned()
            .collect();
        assert_eq!(
            rotations,
            vec![Step::RotateLeft { key: 1 }, Step::RotateRight { key: 3 }]
        );
        assert_eq!(tree.root_key(), Some(&2));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn swap_keeps_heights_with_positions() {
        let mut tree = AvlTree::new();
        for k in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert(k, ());
        }
        let root = tree.root().unwrap();
        let pred = tree.raw().predecessor(root).unwrap();
        let (root_h, pred_h) = (tree.height(root), tree.height(pred));
        tree.raw_mut().node_swap(root, pred);
        assert_eq!(tree.root(), Some(pred));
        assert_eq!(tree.height(pred), root_h);
        assert_eq!(tree.height(root), pred_h);
    }

    #[test]
    fn deleting_root_rebalances_below() {
        let mut tree = AvlTree::new();
        for k in [5, 3, 8, 2, 4, 7, 9, 1, 6, 10, 11] {
            tree.insert(k, k);
            tree.assert_valid().unwrap();
        }
        for k in [5, 4, 3, 8] {
            assert_eq!(tree.remove(&k), Some(k));
            tree.assert_valid().unwrap();
        }
        let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2, 6, 7, 9, 10, 11]);
    }
}
