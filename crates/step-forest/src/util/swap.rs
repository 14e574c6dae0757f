use crate::types::Node;

use super::{get_l, get_p, get_r, is_left_child, set_l, set_p, set_r};

/// Exchanges the structural positions of `x` and `y`.
///
/// Only links move; keys, values and node indices stay with their nodes.
/// Handles the adjacent cases (one node is the parent of the other) and the
/// sibling case, where both nodes hang off the same parent. Returns the new
/// root.
pub fn swap<N: Node>(arena: &mut [N], mut root: Option<u32>, x: u32, y: u32) -> Option<u32> {
    if x == y {
        return root;
    }

    let xp = get_p(arena, x);
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);
    let x_is_left = is_left_child(arena, x);

    let yp = get_p(arena, y);
    let yl = get_l(arena, y);
    let yr = get_r(arena, y);
    let y_is_left = is_left_child(arena, y);

    // A link that pointed at the other node now points back at its partner.
    let flip = |link: Option<u32>, from: u32, to: u32| -> Option<u32> {
        if link == Some(from) {
            Some(to)
        } else {
            link
        }
    };

    let (nxp, nxl, nxr) = (flip(yp, x, y), flip(yl, x, y), flip(yr, x, y));
    let (nyp, nyl, nyr) = (flip(xp, y, x), flip(xl, y, x), flip(xr, y, x));

    set_p(arena, x, nxp);
    set_l(arena, x, nxl);
    set_r(arena, x, nxr);
    set_p(arena, y, nyp);
    set_l(arena, y, nyl);
    set_r(arena, y, nyr);

    for child in [nxl, nxr].into_iter().flatten() {
        if child != y {
            set_p(arena, child, Some(x));
        }
    }
    for child in [nyl, nyr].into_iter().flatten() {
        if child != x {
            set_p(arena, child, Some(y));
        }
    }

    match nxp {
        Some(p) if p != y => {
            if y_is_left {
                set_l(arena, p, Some(x));
            } else {
                set_r(arena, p, Some(x));
            }
        }
        Some(_) => {}
        None => root = Some(x),
    }
    match nyp {
        Some(p) if p != x => {
            if x_is_left {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
        }
        Some(_) => {}
        None => root = Some(y),
    }

    root
}
