//! Shared base engine.
//!
//! [`RawTree`] owns the node arena and the root index, and implements the
//! plain binary-search-tree primitives every variant is built from: descent,
//! attach, predecessor, structural swap, splice, rotations and the min/max
//! walks. Variants layer their own insert/remove algorithms on
//! top (see [`crate::bst`], [`crate::avl`], [`crate::splay`]).

use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::step::{emit, Direction, Observer, Step};
use crate::types::KvNode;
use crate::util::{self, first, get_l, get_p, get_r, last, next, prev, replace_child, set_p};

/// Result of a keyed descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// The key is stored at this index.
    Found(u32),
    /// The key is absent. `parent` is the last node visited (the would-be
    /// parent of a new node), `None` when the tree is empty.
    Vacant {
        parent: Option<u32>,
        direction: Direction,
    },
}

/// Result of [`RawTree::upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// Existing node; its value was overwritten.
    Updated(u32),
    /// Newly attached node.
    Inserted(u32),
}

impl Upsert {
    pub fn index(self) -> u32 {
        match self {
            Upsert::Updated(i) | Upsert::Inserted(i) => i,
        }
    }
}

/// Arena-backed binary search tree without any balancing policy.
///
/// Node indices are stable across inserts, rotations and swaps. Removing a
/// node moves the last arena slot into the freed one, so an index obtained
/// before a removal must be looked up again afterwards.
#[derive(Clone, Debug)]
pub struct RawTree<K, V, N> {
    arena: Vec<N>,
    root: Option<u32>,
    _kv: PhantomData<(K, V)>,
}

impl<K, V, N> Default for RawTree<K, V, N> {
    fn default() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            _kv: PhantomData,
        }
    }
}

impl<K, V, N> RawTree<K, V, N>
where
    K: Ord + Clone + Debug,
    N: KvNode<K, V>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut N {
        &mut self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.node(idx).value()
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        self.node_mut(idx).value_mut()
    }

    pub fn parent(&self, idx: u32) -> Option<u32> {
        get_p(&self.arena, idx)
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        get_l(&self.arena, idx)
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        get_r(&self.arena, idx)
    }

    fn key_cloned(&self, idx: u32) -> K {
        self.key(idx).clone()
    }

    /// Silent lookup.
    pub fn locate(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match key.cmp(self.key(i)) {
                Ordering::Equal => return Some(i),
                Ordering::Less => self.left(i),
                Ordering::Greater => self.right(i),
            };
        }
        None
    }

    /// Descends from the root toward `key`, emitting a `visit` per node.
    pub fn probe<O>(&self, key: &K, obs: &mut O) -> Probe
    where
        O: Observer<K> + ?Sized,
    {
        let mut parent = None;
        let mut direction = Direction::Left;
        let mut curr = self.root;
        while let Some(i) = curr {
            emit(obs, Step::Visit { key: self.key_cloned(i) });
            parent = Some(i);
            curr = match key.cmp(self.key(i)) {
                Ordering::Equal => return Probe::Found(i),
                Ordering::Less => {
                    direction = Direction::Left;
                    self.left(i)
                }
                Ordering::Greater => {
                    direction = Direction::Right;
                    self.right(i)
                }
            };
        }
        Probe::Vacant { parent, direction }
    }

    /// Plain lookup: visits, then `found` or `not-found`.
    pub fn find<O>(&self, key: &K, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        match self.probe(key, obs) {
            Probe::Found(i) => {
                emit(obs, Step::Found { key: self.key_cloned(i) });
                Some(i)
            }
            Probe::Vacant { .. } => {
                emit(obs, Step::NotFound { key: key.clone() });
                None
            }
        }
    }

    /// Overwrites the value of an existing key, or attaches a new node at
    /// the empty slot the descent ends on. Never restructures.
    pub fn upsert<O>(&mut self, key: K, value: V, obs: &mut O) -> Upsert
    where
        O: Observer<K> + ?Sized,
    {
        match self.probe(&key, obs) {
            Probe::Found(i) => {
                self.node_mut(i).set_value(value);
                emit(obs, Step::Update { key });
                Upsert::Updated(i)
            }
            Probe::Vacant { parent, direction } => {
                let idx = self.alloc(N::new(key.clone(), value));
                let parent_key = parent.map(|p| self.key_cloned(p));
                self.attach(idx, parent, direction);
                emit(
                    obs,
                    Step::Insert {
                        key,
                        parent_key,
                        direction: parent.map(|_| direction),
                    },
                );
                Upsert::Inserted(idx)
            }
        }
    }

    fn alloc(&mut self, node: N) -> u32 {
        self.arena.push(node);
        (self.arena.len() - 1) as u32
    }

    fn attach(&mut self, idx: u32, parent: Option<u32>, direction: Direction) {
        let Some(p) = parent else {
            self.root = Some(idx);
            return;
        };
        match direction {
            Direction::Left => self.node_mut(p).set_l(Some(idx)),
            Direction::Right => self.node_mut(p).set_r(Some(idx)),
        }
        self.node_mut(idx).set_p(Some(p));
    }

    /// In-order predecessor of `idx`, `None` at the minimum.
    pub fn predecessor(&self, idx: u32) -> Option<u32> {
        prev(&self.arena, idx)
    }

    pub fn successor(&self, idx: u32) -> Option<u32> {
        next(&self.arena, idx)
    }

    /// Exchanges the structural positions of `a` and `b`. Stored heights
    /// stay with the positions, not with the nodes.
    pub fn node_swap(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        self.root = util::swap(&mut self.arena, self.root, a, b);
        if let (Some(ha), Some(hb)) = (
            self.node(a).stored_height(),
            self.node(b).stored_height(),
        ) {
            self.node_mut(a).set_stored_height(hb);
            self.node_mut(b).set_stored_height(ha);
        }
    }

    /// Unlinks a node with at most one child, promoting the child.
    pub fn splice(&mut self, idx: u32) {
        self.root = util::splice(&mut self.arena, self.root, idx);
    }

    /// The removal prefix every variant shares: swap a two-child node with
    /// its predecessor (emitting `swap`), emit `remove`, then splice it out.
    ///
    /// Returns the node's parent at splice time, where AVL rebalancing
    /// starts. The node stays in the arena, unlinked, until
    /// [`RawTree::release`].
    pub fn detach<O>(&mut self, idx: u32, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        if self.left(idx).is_some() && self.right(idx).is_some() {
            if let Some(pred) = self.predecessor(idx) {
                emit(
                    obs,
                    Step::Swap {
                        key1: self.key_cloned(idx),
                        key2: self.key_cloned(pred),
                    },
                );
                self.node_swap(idx, pred);
            }
        }
        emit(obs, Step::Remove { key: self.key_cloned(idx) });
        let parent = self.parent(idx);
        self.splice(idx);
        parent
    }

    /// Drops an unlinked node from the arena, returning its payload.
    ///
    /// The last arena slot moves into `idx`; links pointing at it are
    /// rewritten.
    pub fn release(&mut self, idx: u32) -> (K, V) {
        debug_assert!(self.parent(idx).is_none() && self.root != Some(idx));
        let moved = (self.arena.len() - 1) as u32;
        let node = self.arena.swap_remove(idx as usize);
        if moved != idx {
            if self.root == Some(moved) {
                self.root = Some(idx);
            }
            if let Some(p) = self.parent(idx) {
                replace_child(&mut self.arena, p, moved, Some(idx));
            }
            for child in [self.left(idx), self.right(idx)].into_iter().flatten() {
                set_p(&mut self.arena, child, Some(idx));
            }
        }
        node.into_entry()
    }

    /// Rotation about `n` toward the left, emitting `rotate-left` first.
    pub fn rotate_left<O>(&mut self, n: u32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        emit(obs, Step::RotateLeft { key: self.key_cloned(n) });
        self.root = util::rotate_left(&mut self.arena, self.root, n);
    }

    /// Rotation about `n` toward the right, emitting `rotate-right` first.
    pub fn rotate_right<O>(&mut self, n: u32, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        emit(obs, Step::RotateRight { key: self.key_cloned(n) });
        self.root = util::rotate_right(&mut self.arena, self.root, n);
    }

    /// Smallest node, silently.
    pub fn smallest(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    /// Largest node, silently.
    pub fn largest(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    /// Walks to an extreme, visiting every node passed on the way, then
    /// reports `found` for the extreme itself. Silent on an empty tree.
    pub fn find_extreme<O>(&self, direction: Direction, obs: &mut O) -> Option<u32>
    where
        O: Observer<K> + ?Sized,
    {
        let mut curr = self.root?;
        loop {
            let step = match direction {
                Direction::Left => self.left(curr),
                Direction::Right => self.right(curr),
            };
            let Some(child) = step else {
                break;
            };
            emit(obs, Step::Visit { key: self.key_cloned(curr) });
            curr = child;
        }
        emit(obs, Step::Found { key: self.key_cloned(curr) });
        Some(curr)
    }

    /// Drops every node at once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// In-order `(key, value)` iterator.
    pub fn iter(&self) -> Iter<'_, K, V, N> {
        Iter {
            tree: self,
            curr: self.smallest(),
        }
    }
}

/// In-order iterator over a [`RawTree`].
pub struct Iter<'a, K, V, N> {
    tree: &'a RawTree<K, V, N>,
    curr: Option<u32>,
}

impl<'a, K, V, N> Iterator for Iter<'a, K, V, N>
where
    K: Ord + Clone + Debug,
    N: KvNode<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(&self.tree.arena, i);
        let node = &self.tree.arena[i as usize];
        Some((node.key(), node.value()))
    }
}
