//! Detached, serializable copies of a tree's shape.
//!
//! A [`Snapshot`] is what a renderer consumes: it owns plain copies of every
//! key and value and cannot observe later mutation of the source tree.

use std::fmt::{Debug, Display, Write as _};

use serde::Serialize;

use crate::tree::RawTree;
use crate::types::KvNode;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SnapshotNode<K, V> {
    pub key: K,
    pub value: V,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    pub left: Option<Box<SnapshotNode<K, V>>>,
    pub right: Option<Box<SnapshotNode<K, V>>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot<K, V> {
    pub root: Option<Box<SnapshotNode<K, V>>>,
}

impl<K, V> Snapshot<K, V> {
    pub fn of<N>(tree: &RawTree<K, V, N>) -> Self
    where
        K: Ord + Clone + Debug,
        V: Clone,
        N: KvNode<K, V>,
    {
        fn copy<K, V, N>(tree: &RawTree<K, V, N>, idx: u32) -> Box<SnapshotNode<K, V>>
        where
            K: Ord + Clone + Debug,
            V: Clone,
            N: KvNode<K, V>,
        {
            let node = tree.node(idx);
            Box::new(SnapshotNode {
                key: node.key().clone(),
                value: node.value().clone(),
                height: node.stored_height(),
                left: tree.left(idx).map(|l| copy(tree, l)),
                right: tree.right(idx).map(|r| copy(tree, r)),
            })
        }

        Self {
            root: tree.root().map(|r| copy(tree, r)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// In-order keys.
    pub fn keys(&self) -> Vec<&K> {
        fn walk<'a, K, V>(node: &'a SnapshotNode<K, V>, out: &mut Vec<&'a K>) {
            if let Some(l) = &node.left {
                walk(l, out);
            }
            out.push(&node.key);
            if let Some(r) = &node.right {
                walk(r, out);
            }
        }
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            walk(root, &mut out);
        }
        out
    }

    /// Parent → child key pairs in preorder.
    pub fn edges(&self) -> Vec<(&K, &K)> {
        fn walk<'a, K, V>(node: &'a SnapshotNode<K, V>, out: &mut Vec<(&'a K, &'a K)>) {
            for child in [&node.left, &node.right].into_iter().flatten() {
                out.push((&node.key, &child.key));
                walk(child, out);
            }
        }
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            walk(root, &mut out);
        }
        out
    }

    /// Indented text dump, one node per line.
    pub fn print(&self) -> String
    where
        K: Display,
    {
        fn walk<K: Display, V>(node: &SnapshotNode<K, V>, tab: &str, side: &str, out: &mut String) {
            let _ = write!(out, "\n{tab}{side} {}", node.key);
            if let Some(h) = node.height {
                let _ = write!(out, " [h={h}]");
            }
            let tab = format!("{tab}  ");
            if let Some(l) = &node.left {
                walk(l, &tab, "←", out);
            }
            if let Some(r) = &node.right {
                walk(r, &tab, "→", out);
            }
        }
        match &self.root {
            Some(root) => {
                let mut out = "Tree".to_string();
                walk(root, "", "└─", &mut out);
                out
            }
            None => "Tree ∅".to_string(),
        }
    }
}
