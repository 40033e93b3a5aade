//! Append-only edge store with per-vertex incidence lists.

use super::types::{EdgeId, MatchingError, Vertex};

/// Edges by insertion index. `end[2k]` and `end[2k+1]` are the endpoints of
/// edge `k`; `adj[v]` lists the ids of edges incident to `v` in insertion order.
#[derive(Clone, Debug)]
pub struct EdgeStore {
    nvertex: usize,
    end: Vec<Vertex>,
    adj: Vec<Vec<EdgeId>>,
}

impl EdgeStore {
    pub fn new(nvertex: usize) -> Self {
        Self {
            nvertex,
            end: Vec::new(),
            adj: vec![Vec::new(); nvertex + 1],
        }
    }

    #[inline]
    pub fn nvertex(&self) -> usize {
        self.nvertex
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end.is_empty()
    }

    pub fn check_vertex(&self, v: Vertex) -> Result<(), MatchingError> {
        if v == 0 || v > self.nvertex {
            return Err(MatchingError::VertexOutOfRange {
                vertex: v,
                nvertex: self.nvertex,
            });
        }
        Ok(())
    }

    /// Append edge `vw`. Both endpoints are validated before anything is written.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> Result<EdgeId, MatchingError> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        let e = EdgeId(self.len());
        self.end.push(v);
        self.end.push(w);
        self.adj[v].push(e);
        if w != v {
            self.adj[w].push(e);
        }
        Ok(e)
    }

    /// Endpoints of `e` in insertion order.
    pub fn endpoints(&self, e: EdgeId) -> Result<(Vertex, Vertex), MatchingError> {
        if e.0 >= self.len() {
            return Err(MatchingError::EdgeOutOfRange {
                edge: e,
                nedge: self.len(),
            });
        }
        Ok(self.ends(e))
    }

    /// Unchecked decode for ids issued by this store.
    #[inline]
    pub(crate) fn ends(&self, e: EdgeId) -> (Vertex, Vertex) {
        (self.end[2 * e.0], self.end[2 * e.0 + 1])
    }

    /// The endpoint of `e` that is not `x` (or `x` itself for a self-loop).
    #[inline]
    pub(crate) fn opposite(&self, e: EdgeId, x: Vertex) -> Vertex {
        let (a, b) = self.ends(e);
        if a == x {
            b
        } else {
            a
        }
    }

    #[inline]
    pub fn incident(&self, v: Vertex) -> &[EdgeId] {
        &self.adj[v]
    }

    /// All edges as `(id, v, w)`.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, Vertex, Vertex)> + '_ {
        self.end
            .chunks_exact(2)
            .enumerate()
            .map(|(k, vw)| (EdgeId(k), vw[0], vw[1]))
    }

    /// True if some stored edge joins `v` and `w`.
    pub fn joins(&self, v: Vertex, w: Vertex) -> bool {
        self.adj
            .get(v)
            .map(|inc| {
                inc.iter().any(|&e| {
                    let (a, b) = self.ends(e);
                    (a == v && b == w) || (a == w && b == v)
                })
            })
            .unwrap_or(false)
    }
}
