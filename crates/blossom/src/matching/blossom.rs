//! Edge labeling: implicit blossom discovery (procedure L).
//!
//! Edge `xy` joins outer vertices `x` and `y`. Let `P(x)`, `P(y)` be their
//! alternating paths to the root. The join is the first non-outer vertex on
//! both paths; every non-outer vertex before it on either path becomes outer
//! with the edge label `e`, and its base becomes the join. No contracted
//! graph is built: membership is carried by labels and `FirstMap` alone.

use super::edges::EdgeStore;
use super::state::LabelState;
use super::types::{EdgeId, Label, Vertex, SENTINEL};

/// Label the blossom closed by edge `e = xy`. Returns the join, or `None` if
/// `x` and `y` already share a base (no new blossom).
pub fn assign_edge_labels(
    edges: &EdgeStore,
    st: &mut LabelState,
    x: Vertex,
    y: Vertex,
    e: EdgeId,
) -> Option<Vertex> {
    let mut r = st.first.base(x);
    let mut s = st.first.base(y);
    if r == s {
        return None;
    }

    // Find the join by advancing alternately along P(x) and P(y). Once one
    // walk reaches the sentinel it stays parked there.
    let mut flagged = vec![r, s];
    st.set_flag(r, e);
    st.set_flag(s, e);
    let join = loop {
        if s != SENTINEL {
            std::mem::swap(&mut r, &mut s);
        }
        r = st.next_nonouter(r);
        if st.is_flagged(r, e) {
            break r;
        }
        st.set_flag(r, e);
        flagged.push(r);
    };

    for start in [st.first.base(x), st.first.base(y)] {
        let mut v = start;
        while v != join {
            st.set_label(edges, v, Label::Edge(e));
            st.first.set_base(v, join);
            v = st.next_nonouter(v);
        }
    }

    // Walks may have run past the join; those flags must not outlive this call.
    for v in flagged {
        if st.is_flagged(v, e) {
            st.label[v] = Label::Unreached;
        }
    }

    st.first.redirect_stale(&st.outer, &st.label, join);
    tracing::trace!(x, y, edge = e.0, join, "blossom");
    Some(join)
}
