use crate::types::{KvNode, Node};

/// AVL node: a plain node plus the height of the subtree it roots.
#[derive(Clone, Debug, PartialEq)]
pub struct AvlNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Leaf = 1. An empty subtree counts as 0.
    pub height: i32,
}

impl<K, V> Node for AvlNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for AvlNode<K, V> {
    fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            height: 1,
        }
    }

    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }

    fn stored_height(&self) -> Option<i32> {
        Some(self.height)
    }

    fn set_stored_height(&mut self, height: i32) {
        self.height = height;
    }
}
