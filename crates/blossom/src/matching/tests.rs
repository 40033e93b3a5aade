//! Engine tests: known small graphs, hand-built procedure states, and
//! property checks against a brute-force optimum.

use super::*;
use crate::gen::{blossom_chain, complete, cycle, path};
use crate::verify::verify_matching;
use proptest::prelude::*;

fn matched(n: usize, edges: &[(Vertex, Vertex)]) -> Matching {
    let mut m = Matching::from_edges(n, edges.iter().copied()).unwrap();
    m.run();
    m
}

/// Maximum matching size (in vertices) by exhaustive search; fine for n <= 12.
fn brute_force_size(n: usize, edges: &[(Vertex, Vertex)]) -> usize {
    let mut adj = vec![vec![false; n + 1]; n + 1];
    for &(v, w) in edges {
        if v != w {
            adj[v][w] = true;
            adj[w][v] = true;
        }
    }
    fn best(mask: u32, n: usize, adj: &[Vec<bool>], memo: &mut Vec<Option<usize>>) -> usize {
        if let Some(b) = memo[mask as usize] {
            return b;
        }
        let Some(v) = (1..=n).find(|&v| mask & (1 << v) == 0) else {
            return 0;
        };
        let mut b = best(mask | (1 << v), n, adj, memo);
        for w in (v + 1)..=n {
            if mask & (1 << w) == 0 && adj[v][w] {
                b = b.max(2 + best(mask | (1 << v) | (1 << w), n, adj, memo));
            }
        }
        memo[mask as usize] = Some(b);
        b
    }
    let mut memo = vec![None; 1 << (n + 1)];
    best(1, n, &adj, &mut memo)
}

fn all_unreached(m: &Matching) -> bool {
    (0..=m.nvertex()).all(|v| m.label(v) == Label::Unreached)
}

#[test]
fn triangle_leaves_one_single() {
    let m = matched(3, &[(1, 2), (2, 3), (1, 3)]);
    assert_eq!(m.matching_size(), 2);
    assert_eq!(m.cardinality(), 1);
    assert_eq!(m.unmatched().len(), 1);
}

#[test]
fn two_disjoint_edges() {
    let m = matched(4, &[(1, 2), (3, 4)]);
    assert_eq!(m.matching_size(), 4);
    assert_eq!(m.pairs(), vec![(1, 2), (3, 4)]);
}

#[test]
fn five_cycle_needs_blossom() {
    let m = matched(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
    assert_eq!(m.matching_size(), 4);
    verify_matching(&m).unwrap();
}

#[test]
fn flower_center_plus_triangle() {
    // Center 1 joined to a triangle 2-3-4: K4, perfect.
    let m = matched(4, &[(1, 2), (1, 3), (1, 4), (2, 3), (3, 4), (4, 2)]);
    assert_eq!(m.matching_size(), 4);
    // Vertex 0 cannot be the center; only the triangle remains.
    let mut f = Matching::new(3);
    assert!(f.add_edge(0, 1).is_err());
    for (v, w) in [(1, 2), (2, 3), (3, 1)] {
        f.add_edge(v, w).unwrap();
    }
    f.run();
    assert_eq!(f.matching_size(), 3 - 1);
}

#[test]
fn join_behind_second_frontier() {
    // Smallest graph where the walk from one frontier passes the other
    // frontier's start vertex before that vertex is flagged.
    let edges = [(1, 5), (3, 4), (2, 3), (1, 2), (1, 4), (4, 5)];
    let m = matched(5, &edges);
    assert_eq!(m.matching_size(), 4);
    verify_matching(&m).unwrap();
    assert!(all_unreached(&m));
}

#[test]
fn structured_families() {
    for n in 1..12 {
        assert_eq!(matched(n, &path(n).edges).matching_size(), n / 2 * 2, "path {n}");
        assert_eq!(matched(n, &complete(n).edges).matching_size(), n / 2 * 2, "K{n}");
    }
    for n in 3..12 {
        assert_eq!(matched(n, &cycle(n).edges).matching_size(), n / 2 * 2, "C{n}");
    }
    for k in 0..8 {
        let g = blossom_chain(k);
        let m = matched(g.nvertex, &g.edges);
        assert_eq!(m.matching_size(), g.nvertex / 2 * 2, "chain {k}");
    }
}

#[test]
fn nothing_matched_before_run() {
    let m = Matching::from_edges(4, [(1, 2), (3, 4)]).unwrap();
    assert_eq!(m.matching_size(), 0);
    assert!(m.mates().iter().all(|&w| w == SENTINEL));
    assert_eq!(m.mate(1), Ok(None));
    assert!(m.pairs().is_empty());
}

#[test]
fn run_twice_is_noop() {
    let mut m = Matching::from_edges(5, [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]).unwrap();
    let first = m.run();
    let pairs = m.pairs();
    let second = m.run();
    assert_eq!(first.augmentations, 2);
    // Only the vertex left single is searched again, and it finds nothing.
    assert_eq!(second, RunStats { searches: 1, augmentations: 0 });
    assert_eq!(m.pairs(), pairs);
}

#[test]
fn mate_reads_and_range_errors() {
    let m = matched(3, &[(2, 3)]);
    assert_eq!(m.mate(2), Ok(Some(3)));
    assert_eq!(m.mate(3), Ok(Some(2)));
    assert_eq!(m.mate(1), Ok(None));
    assert_eq!(
        m.mate(4),
        Err(MatchingError::VertexOutOfRange {
            vertex: 4,
            nvertex: 3
        })
    );
    assert!(m.mate(0).is_err());
    assert_eq!(m.edge(EdgeId(0)), Ok((2, 3)));
    assert!(m.edge(EdgeId(1)).is_err());
}

#[test]
fn self_loops_and_duplicates_are_harmless() {
    let m = matched(3, &[(1, 1), (1, 2), (1, 2), (2, 2), (3, 3)]);
    assert_eq!(m.pairs(), vec![(1, 2)]);
    verify_matching(&m).unwrap();
}

#[test]
fn empty_graphs() {
    let m = matched(0, &[]);
    assert_eq!(m.matching_size(), 0);
    let m = matched(3, &[]);
    assert_eq!(m.unmatched(), vec![1, 2, 3]);
}

fn five_cycle_store() -> EdgeStore {
    let mut es = EdgeStore::new(5);
    for (v, w) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)] {
        es.add_edge(v, w).unwrap();
    }
    es
}

#[test]
fn edge_labeling_on_hand_built_tree() {
    // Matched 1-2 and 3-4, root 5. Tree: 5 -> (4) 3 and 5 -> (1) 2.
    let es = five_cycle_store();
    let mut st = LabelState::new(5);
    st.mate[1] = 2;
    st.mate[2] = 1;
    st.mate[3] = 4;
    st.mate[4] = 3;
    st.set_label(&es, 5, Label::Start);
    st.first.set_base(5, SENTINEL);
    st.set_label(&es, 3, Label::Vertex(5));
    st.first.set_base(3, 4);
    st.set_label(&es, 2, Label::Vertex(5));
    st.first.set_base(2, 1);

    let e23 = EdgeId(1);
    assert_eq!(assign_edge_labels(&es, &mut st, 3, 2, e23), Some(SENTINEL));
    assert_eq!(st.label(4), Label::Edge(e23));
    assert_eq!(st.label(1), Label::Edge(e23));
    for v in 1..=5 {
        assert!(st.is_outer(v));
        assert_eq!(st.first.base(v), SENTINEL, "base of {v}");
    }
    assert!(st.label.iter().all(|l| !matches!(l, Label::Flag(_))));
    // Same base on both sides now: no new blossom.
    assert_eq!(assign_edge_labels(&es, &mut st, 1, 4, EdgeId(3)), None);
}

#[test]
fn rematch_simple_stem() {
    // 1 (root) - 2 = 3 - 4 (single). Augment through edge 3-4.
    let mut es = EdgeStore::new(4);
    for (v, w) in [(1, 2), (2, 3), (3, 4)] {
        es.add_edge(v, w).unwrap();
    }
    let mut st = LabelState::new(4);
    st.mate[2] = 3;
    st.mate[3] = 2;
    st.set_label(&es, 1, Label::Start);
    st.set_label(&es, 3, Label::Vertex(1));
    st.mate[4] = 3;
    rematch(&es, &mut st, 3, 4);
    assert_eq!(&st.mate[1..], &[2, 1, 4, 3]);
}

#[test]
fn search_outcomes() {
    let es = five_cycle_store();
    let mut st = LabelState::new(5);
    assert_eq!(search_from(&es, &mut st, 1), SearchOutcome::Augmented);
    assert_eq!(search_from(&es, &mut st, 3), SearchOutcome::Augmented);
    assert_eq!(search_from(&es, &mut st, 5), SearchOutcome::Exhausted);
    assert!(st.outer.is_empty());
    assert_eq!(st.work.pending(), 0);
}

fn small_graph() -> impl Strategy<Value = (usize, Vec<(Vertex, Vertex)>)> {
    (1usize..=9).prop_flat_map(|n| (Just(n), prop::collection::vec((1..=n, 1..=n), 0..24)))
}

proptest! {
    #[test]
    fn prop_valid_and_maximum((n, edges) in small_graph()) {
        let m = matched(n, &edges);
        prop_assert!(verify_matching(&m).is_ok());
        prop_assert!(m.cardinality() <= n / 2);
        prop_assert_eq!(m.matching_size(), brute_force_size(n, &edges));
        prop_assert!(all_unreached(&m));
    }

    #[test]
    fn prop_size_independent_of_insertion_order(
        (n, edges, shuffled) in small_graph()
            .prop_flat_map(|(n, edges)| (Just(n), Just(edges.clone()), Just(edges).prop_shuffle()))
    ) {
        let a = matched(n, &edges);
        let b = matched(n, &shuffled);
        prop_assert_eq!(a.matching_size(), b.matching_size());
    }

    #[test]
    fn prop_second_run_changes_nothing((n, edges) in small_graph()) {
        let mut m = Matching::from_edges(n, edges).unwrap();
        m.run();
        let before = m.pairs();
        let stats = m.run();
        prop_assert_eq!(stats.augmentations, 0);
        prop_assert_eq!(m.pairs(), before);
    }
}
