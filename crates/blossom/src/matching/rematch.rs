//! Rematching along an augmenting path (procedure R).
//!
//! `rematch(v, w)` matches outer `v` to `w` and flips the rest of the path
//! from `v` back to the root. It does not set `mate[w] = v`; the caller or an
//! enclosing step does. The recursive formulation is run on an explicit stack
//! so path length is bounded by memory, not by the call stack.

use super::edges::EdgeStore;
use super::state::LabelState;
use super::types::{Label, Vertex};

pub fn rematch(edges: &EdgeStore, st: &mut LabelState, v: Vertex, w: Vertex) {
    // LIFO order reproduces the depth-first order of the recursive calls.
    let mut pending: Vec<(Vertex, Vertex)> = vec![(v, w)];
    while let Some((v, w)) = pending.pop() {
        let t = st.mate[v];
        st.mate[v] = w;
        if st.mate[t] != v {
            // Rest of this path is already rematched.
            continue;
        }
        match st.label[v] {
            Label::Vertex(p) => {
                st.mate[t] = p;
                pending.push((p, t));
            }
            Label::Edge(e) => {
                let (x, y) = edges.ends(e);
                pending.push((y, x));
                pending.push((x, y));
            }
            other => debug_assert!(false, "rematch through {v} with label {other:?}"),
        }
    }
}
