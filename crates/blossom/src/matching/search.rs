//! Search driver (procedure E) and the public `Matching` object.

use super::blossom::assign_edge_labels;
use super::edges::EdgeStore;
use super::rematch::rematch;
use super::state::LabelState;
use super::types::{
    EdgeId, Label, MatchCfg, MatchingError, RunStats, SearchOutcome, Vertex, SENTINEL,
};
use crate::verify::verify_matching;

/// Grow the matching from the single vertex `u`, or exhaust every alternating
/// path from it. Leaves the per-search state reset either way.
pub fn search_from(edges: &EdgeStore, st: &mut LabelState, u: Vertex) -> SearchOutcome {
    st.set_label(edges, u, Label::Start);
    st.first.set_base(u, SENTINEL);

    let outcome = loop {
        let Some((x, e)) = st.work.choose_next() else {
            break SearchOutcome::Exhausted;
        };
        let y = edges.opposite(e, x);

        // Augment.
        if !st.is_matched(y) && y != u {
            st.mate[y] = x;
            rematch(edges, st, x, y);
            tracing::trace!(root = u, x, y, "augment");
            break SearchOutcome::Augmented;
        }

        // Blossom.
        if st.is_outer(y) {
            assign_edge_labels(edges, st, x, y, e);
            continue;
        }

        // Grow the tree by one level.
        let v = st.mate[y];
        if !st.is_outer(v) {
            st.set_label(edges, v, Label::Vertex(x));
            st.first.set_base(v, y);
        }
    };

    st.stop_search();
    outcome
}

/// Maximum-cardinality matching on vertices `1..=V` of a general graph.
///
/// Build with `new` and `add_edge`, call `run`, then read `mate`/`pairs`.
/// Before `run` every vertex is single.
#[derive(Clone, Debug)]
pub struct Matching {
    edges: EdgeStore,
    state: LabelState,
    cfg: MatchCfg,
}

impl Matching {
    pub fn new(nvertex: usize) -> Self {
        Self::with_cfg(nvertex, MatchCfg::default())
    }

    pub fn with_cfg(nvertex: usize, cfg: MatchCfg) -> Self {
        Self {
            edges: EdgeStore::new(nvertex),
            state: LabelState::new(nvertex),
            cfg,
        }
    }

    /// Build from an edge list; fails on the first out-of-range endpoint.
    pub fn from_edges<I>(nvertex: usize, edges: I) -> Result<Self, MatchingError>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut m = Self::new(nvertex);
        for (v, w) in edges {
            m.add_edge(v, w)?;
        }
        Ok(m)
    }

    /// Add undirected edge `vw`. Repeated pairs are stored again and only
    /// cost scan time.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> Result<EdgeId, MatchingError> {
        self.edges.add_edge(v, w)
    }

    /// Run one search from every vertex that is still single. Afterwards the
    /// matching has maximum cardinality; running again changes nothing.
    pub fn run(&mut self) -> RunStats {
        let mut stats = RunStats::default();
        for u in 1..=self.edges.nvertex() {
            if self.state.is_matched(u) {
                continue;
            }
            stats.searches += 1;
            let outcome = search_from(&self.edges, &mut self.state, u);
            if outcome == SearchOutcome::Augmented {
                stats.augmentations += 1;
            }
            tracing::debug!(root = u, ?outcome, "search");
        }
        tracing::debug!(
            searches = stats.searches,
            augmentations = stats.augmentations,
            matched = self.matching_size(),
            "run complete"
        );
        if self.cfg.verify {
            if let Err(err) = verify_matching(self) {
                panic!("matching failed verification: {err}");
            }
        }
        stats
    }

    #[inline]
    pub fn nvertex(&self) -> usize {
        self.edges.nvertex()
    }

    #[inline]
    pub fn nedge(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    pub fn edge(&self, e: EdgeId) -> Result<(Vertex, Vertex), MatchingError> {
        self.edges.endpoints(e)
    }

    /// Number of matched vertices (twice the number of matched edges).
    pub fn matching_size(&self) -> usize {
        self.state.mate[1..].iter().filter(|&&m| m != SENTINEL).count()
    }

    /// Number of matched edges.
    pub fn cardinality(&self) -> usize {
        self.matching_size() / 2
    }

    pub fn mate(&self, v: Vertex) -> Result<Option<Vertex>, MatchingError> {
        self.edges.check_vertex(v)?;
        let m = self.state.mate[v];
        Ok((m != SENTINEL).then_some(m))
    }

    /// Raw MATE table; index 0 is the sentinel, `0` means single.
    pub fn mates(&self) -> &[Vertex] {
        &self.state.mate
    }

    /// Matched pairs `(v, w)` with `v < w`, ordered by `v`.
    pub fn pairs(&self) -> Vec<(Vertex, Vertex)> {
        self.state
            .mate
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(v, &w)| w != SENTINEL && v < w)
            .map(|(v, &w)| (v, w))
            .collect()
    }

    pub fn unmatched(&self) -> Vec<Vertex> {
        (1..=self.nvertex())
            .filter(|&v| !self.state.is_matched(v))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn label(&self, v: Vertex) -> Label {
        self.state.label(v)
    }
}
