//! Identifiers, labels, configuration and errors for the matching engine.
//!
//! Kept small and explicit so `state`, `blossom`, `rematch` and `search`
//! read like the label-based procedures they implement.

use std::fmt;

/// Vertex id. Real vertices are `1..=V`; `0` is the sentinel for
/// "no predecessor" and "above the search root".
pub type Vertex = usize;

/// Sentinel vertex (never a real vertex, never outer).
pub const SENTINEL: Vertex = 0;

/// Edge id: zero-based insertion index into the edge store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Per-vertex search label.
///
/// `Start`, `Vertex` and `Edge` are the outer labels. `Flag` only exists while
/// one blossom-labeling call is walking the two alternating paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Label {
    #[default]
    Unreached,
    /// Root of the current search.
    Start,
    /// Predecessor outer vertex on the alternating path.
    Vertex(Vertex),
    /// The edge whose blossom this (formerly non-outer) vertex joined.
    Edge(EdgeId),
    /// Visited by the labeling walk for this edge.
    Flag(EdgeId),
}

impl Label {
    #[inline]
    pub fn is_outer(self) -> bool {
        matches!(self, Label::Start | Label::Vertex(_) | Label::Edge(_))
    }

    #[inline]
    pub fn has_start_label(self) -> bool {
        matches!(self, Label::Start)
    }

    #[inline]
    pub fn has_vertex_label(self) -> bool {
        matches!(self, Label::Vertex(_))
    }

    #[inline]
    pub fn has_edge_label(self) -> bool {
        matches!(self, Label::Edge(_))
    }

    #[inline]
    pub fn is_flagged_by(self, e: EdgeId) -> bool {
        self == Label::Flag(e)
    }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct MatchCfg {
    /// Check the final matching with `verify_matching` and panic on failure.
    pub verify: bool,
}
impl Default for MatchCfg {
    fn default() -> Self {
        Self {
            verify: cfg!(debug_assertions),
        }
    }
}

/// Counters reported by `Matching::run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Searches started (one per vertex that was single when reached).
    pub searches: usize,
    /// Searches that ended with an augmentation.
    pub augmentations: usize,
}

/// How a single search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Augmented,
    Exhausted,
}

/// Caller errors: every one of them is bad input, none is transient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchingError {
    /// Vertex id outside `1..=nvertex`.
    VertexOutOfRange { vertex: Vertex, nvertex: usize },
    /// Edge id not issued by this store.
    EdgeOutOfRange { edge: EdgeId, nedge: usize },
}

impl fmt::Display for MatchingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchingError::VertexOutOfRange { vertex, nvertex } => write!(
                f,
                "vertex {vertex} out of range (vertices are 1..={nvertex})"
            ),
            MatchingError::EdgeOutOfRange { edge, nedge } => {
                write!(f, "edge {} out of range ({nedge} edges stored)", edge.0)
            }
        }
    }
}

impl std::error::Error for MatchingError {}
