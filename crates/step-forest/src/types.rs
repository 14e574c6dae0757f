//! Node trait definitions.
//!
//! Every tree variant keeps its nodes in a [`Vec`]-backed arena and links
//! them with `Option<u32>` indices. The parent link is bookkeeping for
//! rotations, swaps and splaying only: ownership runs from the root down
//! through `l` / `r`.

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface shared by every tree variant.
///
/// Variants that carry an augmentation (the AVL subtree height) expose it
/// through [`KvNode::stored_height`] so that the shared engine can keep it
/// attached to the tree position when two nodes are swapped.
pub trait KvNode<K, V>: Node {
    /// Fresh, unlinked node. Augmentations start at their default.
    fn new(key: K, value: V) -> Self
    where
        Self: Sized;

    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;

    fn set_value(&mut self, value: V) {
        *self.value_mut() = value;
    }

    /// Consumes the node, returning its payload.
    fn into_entry(self) -> (K, V)
    where
        Self: Sized;

    /// Subtree height, for variants that store one.
    fn stored_height(&self) -> Option<i32> {
        None
    }

    fn set_stored_height(&mut self, _height: i32) {}
}
