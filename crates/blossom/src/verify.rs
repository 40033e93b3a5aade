//! Post-run checks on a matching.
//!
//! These are necessary conditions only (well-formed and maximal); maximum
//! cardinality is covered by the brute-force comparison in the tests.

use std::fmt;

use crate::matching::{EdgeId, Matching, Vertex, SENTINEL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The sentinel slot was written.
    SentinelMatched { mate: Vertex },
    /// `mate[mate[v]] != v`.
    Asymmetric { v: Vertex, mate: Vertex },
    /// `v` and `w` are matched but no stored edge joins them.
    MissingEdge { v: Vertex, w: Vertex },
    /// An edge with two single endpoints could still be added.
    Augmentable { edge: EdgeId, v: Vertex, w: Vertex },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::SentinelMatched { mate } => {
                write!(f, "sentinel vertex 0 is matched to {mate}")
            }
            VerifyError::Asymmetric { v, mate } => {
                write!(f, "vertex {v} is matched to {mate}, which is not matched back")
            }
            VerifyError::MissingEdge { v, w } => {
                write!(f, "matched pair ({v}, {w}) is not an edge of the graph")
            }
            VerifyError::Augmentable { edge, v, w } => write!(
                f,
                "edge {} joins single vertices {v} and {w}",
                edge.0
            ),
        }
    }
}

impl std::error::Error for VerifyError {}

pub fn verify_matching(m: &Matching) -> Result<(), VerifyError> {
    let mate = m.mates();
    if mate[SENTINEL] != SENTINEL {
        return Err(VerifyError::SentinelMatched {
            mate: mate[SENTINEL],
        });
    }
    for v in 1..mate.len() {
        let w = mate[v];
        if w == SENTINEL {
            continue;
        }
        if w >= mate.len() || mate[w] != v {
            return Err(VerifyError::Asymmetric { v, mate: w });
        }
        if v < w && !m.edges().joins(v, w) {
            return Err(VerifyError::MissingEdge { v, w });
        }
    }
    for (edge, v, w) in m.edges().iter() {
        if v != w && mate[v] == SENTINEL && mate[w] == SENTINEL {
            return Err(VerifyError::Augmentable { edge, v, w });
        }
    }
    Ok(())
}
