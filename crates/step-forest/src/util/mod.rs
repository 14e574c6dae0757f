//! Link-surgery helpers over an arena slice.
//!
//! These are the primitives every tree variant composes: in-order walks,
//! splicing out a node with at most one child, single rotations and the
//! structural [`swap`]. None of them look at keys and none of them emit
//! steps; the engines decide what to report around each call.

pub mod swap;

use crate::types::Node;

pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points whichever child slot of `parent` holds `old` at `new`.
#[inline]
pub(crate) fn replace_child<N: Node>(arena: &mut [N], parent: u32, old: u32, new: Option<u32>) {
    if get_l(arena, parent) == Some(old) {
        set_l(arena, parent, new);
    } else {
        set_r(arena, parent, new);
    }
}

/// `true` when `idx` hangs off its parent's left slot.
#[inline]
pub(crate) fn is_left_child<N: Node>(arena: &[N], idx: u32) -> bool {
    get_p(arena, idx).is_some_and(|p| get_l(arena, p) == Some(idx))
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor: the rightmost node of the left subtree, otherwise
/// the nearest ancestor whose right subtree contains `curr`. `None` at the
/// minimum.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Unlinks `node`, which must have at most one child, promoting that child
/// into its slot.
///
/// Returns the new root. The node's own links are cleared.
pub fn splice<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "splice on a node with two children");

    let child = l.or(r);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    if let Some(c) = child {
        set_p(arena, c, p);
    }

    match p {
        Some(p) => {
            replace_child(arena, p, node, child);
            root
        }
        None => child,
    }
}

/// Left rotation about `n`: its right child `x` takes its place.
///
/// ```text
///   n               x
///  / \             / \
/// a   x    →      n   c
///    / \         / \
///   b   c       a   b
/// ```
///
/// Returns the new root. A node without a right child is left untouched.
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let Some(x) = get_r(arena, n) else {
        return root;
    };
    let b = get_l(arena, x);
    let p = get_p(arena, n);

    set_l(arena, x, Some(n));
    set_p(arena, n, Some(x));
    set_r(arena, n, b);
    if let Some(b) = b {
        set_p(arena, b, Some(n));
    }
    set_p(arena, x, p);

    match p {
        Some(p) => {
            replace_child(arena, p, n, Some(x));
            root
        }
        None => Some(x),
    }
}

/// Right rotation about `n`: its left child `x` takes its place.
///
/// ```text
///     n           x
///    / \         / \
///   x   c  →    a   n
///  / \             / \
/// a   b           b   c
/// ```
///
/// Returns the new root. A node without a left child is left untouched.
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let Some(x) = get_l(arena, n) else {
        return root;
    };
    let b = get_r(arena, x);
    let p = get_p(arena, n);

    set_r(arena, x, Some(n));
    set_p(arena, n, Some(x));
    set_l(arena, n, b);
    if let Some(b) = b {
        set_p(arena, b, Some(n));
    }
    set_p(arena, x, p);

    match p {
        Some(p) => {
            replace_child(arena, p, n, Some(x));
            root
        }
        None => Some(x),
    }
}
