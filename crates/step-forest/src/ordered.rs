use std::fmt::Debug;

use crate::snapshot::Snapshot;
use crate::step::{Direction, Observer, Silent};
use crate::tree::{Iter, RawTree};
use crate::types::KvNode;
use crate::validate::{self, InvariantError};

/// External contract shared by every tree variant.
///
/// A variant supplies its node type, access to its [`RawTree`], and its own
/// insert/remove/find algorithms; the rest comes for free. Every operation
/// has a silent form and an `_with` form that reports each structural step
/// to an [`Observer`].
///
/// Indices returned by the find operations stay valid until the next
/// removal.
pub trait OrderedTree<K, V>
where
    K: Ord + Clone + Debug,
{
    type Node: KvNode<K, V>;

    fn raw(&self) -> &RawTree<K, V, Self::Node>;

    fn raw_mut(&mut self) -> &mut RawTree<K, V, Self::Node>;

    fn insert_with<O>(&mut self, key: K, value: V, obs: &mut O)
    where
        O: Observer<K> + ?Sized;

    /// Removes `key`, returning its value. An absent key is reported with a
    /// `not-found` step and leaves the tree untouched.
    fn remove_with<O>(&mut self, key: &K, obs: &mut O) -> Option<V>
    where
        O: Observer<K> + ?Sized;

    fn find_with<O>(&mut self, key: &K, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized;

    fn find_min_with<O>(&mut self, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        self.raw().find_extreme(Direction::Left, obs)
    }

    fn find_max_with<O>(&mut self, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        self.raw().find_extreme(Direction::Right, obs)
    }

    /// Removes the smallest entry through the variant's own removal, so
    /// AVL trees rebalance and splay trees splay.
    fn remove_min_with<O>(&mut self, obs: &mut O) -> Option<(K, V)>
    where
        O: Observer<K> + ?Sized,
    {
        let key = self.raw().key(self.raw().smallest()?).clone();
        let value = self.remove_with(&key, obs)?;
        Some((key, value))
    }

    fn remove_max_with<O>(&mut self, obs: &mut O) -> Option<(K, V)>
    where
        O: Observer<K> + ?Sized,
    {
        let key = self.raw().key(self.raw().largest()?).clone();
        let value = self.remove_with(&key, obs)?;
        Some((key, value))
    }

    fn insert(&mut self, key: K, value: V) {
        self.insert_with(key, value, &mut Silent);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_with(key, &mut Silent)
    }

    fn remove_min(&mut self) -> Option<(K, V)> {
        self.remove_min_with(&mut Silent)
    }

    fn remove_max(&mut self) -> Option<(K, V)> {
        self.remove_max_with(&mut Silent)
    }

    fn find(&mut self, key: &K) -> Option<u32> {
        self.find_with(key, &mut Silent)
    }

    fn find_min(&mut self) -> Option<u32> {
        self.find_min_with(&mut Silent)
    }

    fn find_max(&mut self) -> Option<u32> {
        self.find_max_with(&mut Silent)
    }

    /// Lookup that never restructures the tree, even for splay trees.
    fn get<'a>(&'a self, key: &K) -> Option<&'a V>
    where
        K: 'a,
        V: 'a,
        Self::Node: 'a,
    {
        let raw = self.raw();
        raw.locate(key).map(|i| raw.value(i))
    }

    fn contains_key(&self, key: &K) -> bool {
        self.raw().locate(key).is_some()
    }

    fn key<'a>(&'a self, idx: u32) -> &'a K
    where
        K: 'a,
        V: 'a,
        Self::Node: 'a,
    {
        self.raw().key(idx)
    }

    fn value<'a>(&'a self, idx: u32) -> &'a V
    where
        K: 'a,
        V: 'a,
        Self::Node: 'a,
    {
        self.raw().value(idx)
    }

    fn root(&self) -> Option<u32> {
        self.raw().root()
    }

    fn root_key<'a>(&'a self) -> Option<&'a K>
    where
        K: 'a,
        V: 'a,
        Self::Node: 'a,
    {
        let raw = self.raw();
        raw.root().map(|i| raw.key(i))
    }

    fn len(&self) -> usize {
        self.raw().len()
    }

    fn is_empty(&self) -> bool {
        self.raw().is_empty()
    }

    /// Detaches the root, dropping the whole tree at once.
    fn clear(&mut self) {
        self.raw_mut().clear();
    }

    fn iter(&self) -> Iter<'_, K, V, Self::Node> {
        self.raw().iter()
    }

    fn snapshot(&self) -> Snapshot<K, V>
    where
        V: Clone,
    {
        Snapshot::of(self.raw())
    }

    /// Checks ordering, parent links, and any stored heights.
    fn assert_valid(&self) -> Result<(), InvariantError> {
        validate::check(self.raw())
    }
}
