//! Per-vertex search state: MATE, LABEL, FIRST and the outer set.
//!
//! MATE lives for the whole run. LABEL, FIRST, the outer set and the worklist
//! belong to one search and are reset by `stop_search`.

use super::edges::EdgeStore;
use super::types::{EdgeId, Label, Vertex, SENTINEL};
use super::worklist::OuterWorklist;

/// Blossom-base representatives.
///
/// For an outer vertex `v`, `base(v)` is the first non-outer vertex on the
/// alternating path from `v` towards the root (`SENTINEL` past the root).
/// Discovering a blossom turns some of those representatives outer; the
/// pointers that went stale are then redirected to the new base in one pass
/// (`redirect_stale`), which is the path-compression step of a union-find.
#[derive(Clone, Debug)]
pub struct FirstMap {
    first: Vec<Vertex>,
}

impl FirstMap {
    fn new(nvertex: usize) -> Self {
        Self {
            first: vec![SENTINEL; nvertex + 1],
        }
    }

    #[inline]
    pub fn base(&self, v: Vertex) -> Vertex {
        self.first[v]
    }

    #[inline]
    pub fn set_base(&mut self, v: Vertex, base: Vertex) {
        self.first[v] = base;
    }

    /// Point every outer vertex whose base became outer at `join`.
    pub fn redirect_stale(&mut self, outer: &[Vertex], label: &[Label], join: Vertex) {
        for &i in outer {
            if label[self.first[i]].is_outer() {
                self.first[i] = join;
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct LabelState {
    pub(crate) mate: Vec<Vertex>,
    pub(crate) label: Vec<Label>,
    pub(crate) first: FirstMap,
    /// Outer vertices of the current search, in the order they became outer.
    pub(crate) outer: Vec<Vertex>,
    pub(crate) work: OuterWorklist,
}

impl LabelState {
    pub fn new(nvertex: usize) -> Self {
        Self {
            mate: vec![SENTINEL; nvertex + 1],
            label: vec![Label::Unreached; nvertex + 1],
            first: FirstMap::new(nvertex),
            outer: Vec::new(),
            work: OuterWorklist::default(),
        }
    }

    /// Write `label` on `v`. A vertex crossing into the outer set is recorded
    /// and all of its incident edges are queued; writing another outer label
    /// on an outer vertex queues nothing.
    pub fn set_label(&mut self, edges: &EdgeStore, v: Vertex, label: Label) {
        let was_outer = self.label[v].is_outer();
        self.label[v] = label;
        if label.is_outer() && !was_outer {
            self.outer.push(v);
            self.work.extend_from(v, edges.incident(v));
        }
    }

    #[inline]
    pub fn label(&self, v: Vertex) -> Label {
        self.label[v]
    }

    #[inline]
    pub fn is_outer(&self, v: Vertex) -> bool {
        self.label[v].is_outer()
    }

    #[inline]
    pub fn has_start_label(&self, v: Vertex) -> bool {
        self.label[v].has_start_label()
    }

    #[inline]
    pub fn has_vertex_label(&self, v: Vertex) -> bool {
        self.label[v].has_vertex_label()
    }

    #[inline]
    pub fn has_edge_label(&self, v: Vertex) -> bool {
        self.label[v].has_edge_label()
    }

    #[inline]
    pub fn is_matched(&self, v: Vertex) -> bool {
        self.mate[v] != SENTINEL
    }

    #[inline]
    pub fn set_flag(&mut self, v: Vertex, e: EdgeId) {
        debug_assert!(!self.label[v].is_outer(), "flagging outer vertex {v}");
        self.label[v] = Label::Flag(e);
    }

    #[inline]
    pub fn is_flagged(&self, v: Vertex, e: EdgeId) -> bool {
        self.label[v].is_flagged_by(e)
    }

    /// One step up the alternating path: from non-outer `r` through its mate
    /// to the base of the mate's predecessor.
    pub(crate) fn next_nonouter(&self, r: Vertex) -> Vertex {
        match self.label[self.mate[r]] {
            Label::Vertex(p) => self.first.base(p),
            Label::Start => SENTINEL,
            other => {
                debug_assert!(false, "mate of non-outer {r} carries {other:?}");
                SENTINEL
            }
        }
    }

    /// Make every vertex non-outer again and drop the worklist.
    pub fn stop_search(&mut self) {
        self.label[SENTINEL] = Label::Unreached;
        for &v in &self.outer {
            self.label[v] = Label::Unreached;
            self.label[self.mate[v]] = Label::Unreached;
        }
        self.outer.clear();
        self.work.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EdgeStore {
        let mut es = EdgeStore::new(4);
        es.add_edge(1, 2).unwrap();
        es.add_edge(2, 3).unwrap();
        es.add_edge(3, 4).unwrap();
        es
    }

    #[test]
    fn outer_entry_enqueues_once() {
        let es = store();
        let mut st = LabelState::new(4);
        st.set_label(&es, 2, Label::Start);
        assert!(st.is_outer(2) && st.has_start_label(2));
        assert_eq!(st.work.pending(), 2);
        // Relabeling an outer vertex must not enqueue again.
        st.set_label(&es, 2, Label::Edge(EdgeId(1)));
        assert!(st.has_edge_label(2));
        assert_eq!(st.work.pending(), 2);
        assert_eq!(st.outer, vec![2]);
    }

    #[test]
    fn predicates_are_exclusive() {
        let es = store();
        let mut st = LabelState::new(4);
        st.set_label(&es, 1, Label::Vertex(3));
        st.set_flag(4, EdgeId(2));
        assert!(st.has_vertex_label(1));
        assert!(!st.has_edge_label(1) && !st.has_start_label(1));
        assert!(st.is_flagged(4, EdgeId(2)));
        assert!(!st.is_flagged(4, EdgeId(1)));
        assert!(!st.is_outer(4) && !st.has_edge_label(4));
        assert!(!st.is_outer(3) && !st.has_edge_label(3));
    }

    #[test]
    fn stop_search_clears_outer_and_mates() {
        let es = store();
        let mut st = LabelState::new(4);
        st.mate[2] = 3;
        st.mate[3] = 2;
        st.set_label(&es, 1, Label::Start);
        st.set_label(&es, 3, Label::Vertex(1));
        st.label[2] = Label::Flag(EdgeId(0));
        st.stop_search();
        assert!(st.label.iter().all(|&l| l == Label::Unreached));
        assert!(st.outer.is_empty());
        assert_eq!(st.work.choose_next(), None);
    }

    #[test]
    fn redirect_only_stale_bases() {
        let es = store();
        let mut st = LabelState::new(4);
        st.set_label(&es, 1, Label::Start);
        st.set_label(&es, 3, Label::Vertex(1));
        st.first.set_base(3, 2);
        st.first.set_base(1, SENTINEL);
        st.set_label(&es, 2, Label::Edge(EdgeId(0)));
        st.first.redirect_stale(&st.outer, &st.label, 4);
        assert_eq!(st.first.base(3), 4);
        assert_eq!(st.first.base(1), SENTINEL);
    }
}
