//! Runtime selection between the three tree variants.

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::avl::AvlTree;
use crate::bst::BinarySearchTree;
use crate::ordered::OrderedTree;
use crate::snapshot::Snapshot;
use crate::splay::SplayTree;
use crate::step::{Observer, Silent};
use crate::validate::InvariantError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeKind {
    #[default]
    Bst,
    Avl,
    Splay,
}

impl TreeKind {
    pub const ALL: [TreeKind; 3] = [TreeKind::Bst, TreeKind::Avl, TreeKind::Splay];

    pub fn as_str(self) -> &'static str {
        match self {
            TreeKind::Bst => "bst",
            TreeKind::Avl => "avl",
            TreeKind::Splay => "splay",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            TreeKind::Bst => "Binary Search Tree",
            TreeKind::Avl => "AVL Tree",
            TreeKind::Splay => "Splay Tree",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tree kind `{0}` (expected bst, avl or splay)")]
pub struct ParseTreeKindError(pub String);

impl FromStr for TreeKind {
    type Err = ParseTreeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bst" => Ok(TreeKind::Bst),
            "avl" => Ok(TreeKind::Avl),
            "splay" => Ok(TreeKind::Splay),
            _ => Err(ParseTreeKindError(s.to_string())),
        }
    }
}

/// One tree of a variant chosen at construction time.
#[derive(Clone, Debug)]
pub enum AnyTree<K, V> {
    Bst(BinarySearchTree<K, V>),
    Avl(AvlTree<K, V>),
    Splay(SplayTree<K, V>),
}

macro_rules! dispatch {
    ($self:expr, $tree:ident => $body:expr) => {
        match $self {
            AnyTree::Bst($tree) => $body,
            AnyTree::Avl($tree) => $body,
            AnyTree::Splay($tree) => $body,
        }
    };
}

impl<K, V> AnyTree<K, V>
where
    K: Ord + Clone + Debug,
{
    /// Fresh empty tree of the given variant.
    pub fn new(kind: TreeKind) -> Self {
        match kind {
            TreeKind::Bst => AnyTree::Bst(BinarySearchTree::new()),
            TreeKind::Avl => AnyTree::Avl(AvlTree::new()),
            TreeKind::Splay => AnyTree::Splay(SplayTree::new()),
        }
    }

    pub fn kind(&self) -> TreeKind {
        match self {
            AnyTree::Bst(_) => TreeKind::Bst,
            AnyTree::Avl(_) => TreeKind::Avl,
            AnyTree::Splay(_) => TreeKind::Splay,
        }
    }

    pub fn insert_with<O>(&mut self, key: K, value: V, obs: &mut O)
    where
        O: Observer<K> + ?Sized,
    {
        dispatch!(self, t => t.insert_with(key, value, obs))
    }

    pub fn remove_with<O>(&mut self, key: &K, obs: &mut O) -> Option<V>
    where
        O: Observer<K> + ?Sized,
    {
        dispatch!(self, t => t.remove_with(key, obs))
    }

    pub fn remove_min_with<O>(&mut self, obs: &mut O) -> Option<(K, V)>
    where
        O: Observer<K> + ?Sized,
    {
        dispatch!(self, t => t.remove_min_with(obs))
    }

    pub fn remove_max_with<O>(&mut self, obs: &mut O) -> Option<(K, V)>
    where
        O: Observer<K> + ?Sized,
    {
        dispatch!(self, t => t.remove_max_with(obs))
    }

    /// Observed lookup, returning the key's value.
    pub fn find_with<O>(&mut self, key: &K, obs: &mut O) -> Option<&V>
    where
        O: Observer<K> + ?Sized,
    {
        dispatch!(self, t => {
            let i = t.find_with(key, obs)?;
            Some(t.value(i))
        })
    }

    /// Observed walk to the smallest entry.
    pub fn find_min_with<O>(&mut self, obs: &mut O) -> Option<(&K, &V)>
    where
        O: Observer<K> + ?Sized,
    {
        dispatch!(self, t => {
            let i = t.find_min_with(obs)?;
            Some((t.key(i), t.value(i)))
        })
    }

    pub fn find_max_with<O>(&mut self, obs: &mut O) -> Option<(&K, &V)>
    where
        O: Observer<K> + ?Sized,
    {
        dispatch!(self, t => {
            let i = t.find_max_with(obs)?;
            Some((t.key(i), t.value(i)))
        })
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.insert_with(key, value, &mut Silent);
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_with(key, &mut Silent)
    }

    pub fn remove_min(&mut self) -> Option<(K, V)> {
        self.remove_min_with(&mut Silent)
    }

    pub fn remove_max(&mut self) -> Option<(K, V)> {
        self.remove_max_with(&mut Silent)
    }

    pub fn find(&mut self, key: &K) -> Option<&V> {
        self.find_with(key, &mut Silent)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        dispatch!(self, t => t.get(key))
    }

    pub fn root_key(&self) -> Option<&K> {
        dispatch!(self, t => t.root_key())
    }

    pub fn len(&self) -> usize {
        dispatch!(self, t => t.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, t => t.is_empty())
    }

    pub fn clear(&mut self) {
        dispatch!(self, t => t.clear())
    }

    /// In-order entries.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        dispatch!(self, t => t.iter().collect())
    }

    pub fn snapshot(&self) -> Snapshot<K, V>
    where
        V: Clone,
    {
        dispatch!(self, t => t.snapshot())
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        dispatch!(self, t => t.assert_valid())
    }
}
