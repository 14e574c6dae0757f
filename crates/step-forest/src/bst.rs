use std::fmt::Debug;

use crate::node::TreeNode;
use crate::ordered::OrderedTree;
use crate::step::{emit, Observer, Step};
use crate::tree::RawTree;

/// Unbalanced binary search tree.
///
/// Inserts attach at the empty slot the descent ends on; removals swap a
/// two-child node with its predecessor and splice. Nothing is rebalanced.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<K, V> {
    raw: RawTree<K, V, TreeNode<K, V>>,
}

impl<K, V> Default for BinarySearchTree<K, V> {
    fn default() -> Self {
        Self {
            raw: RawTree::default(),
        }
    }
}

impl<K, V> BinarySearchTree<K, V>
where
    K: Ord + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> OrderedTree<K, V> for BinarySearchTree<K, V>
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
        self.raw.upsert(key, value, obs);
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
        self.raw.detach(idx, obs);
        Some(self.raw.release(idx).1)
    }

    fn find_with<O>(&mut self, key: &K, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        self.raw.find(key, obs)
    }
}
