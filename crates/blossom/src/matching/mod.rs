//! Maximum-cardinality matching in general graphs (Edmonds' blossom method,
//! label-based formulation).
//!
//! Purpose
//! - Compute a largest set of pairwise disjoint edges in an undirected graph
//!   that need not be bipartite.
//!
//! Design
//! - Blossoms are never contracted. A search labels outer vertices, and a
//!   blossom is represented by the edge labels of its absorbed vertices plus
//!   the `FirstMap` base pointers. Auxiliary space is linear in V + E.
//! - One search per single vertex, edges scanned breadth-first from a
//!   worklist. Each search either augments (matching grows by one) or
//!   exhausts a finite edge set, so `run` always terminates.
//! - The procedures are free functions over an explicit context
//!   (`EdgeStore` read-only, `LabelState` mutable) so each can be tested on
//!   a hand-built state:
//!   - `search::search_from` — the driver (E),
//!   - `blossom::assign_edge_labels` — blossom labeling (L),
//!   - `rematch::rematch` — path flipping (R).
//!
//! References
//! - H. N. Gabow, "An efficient implementation of Edmonds' algorithm for
//!   maximum matching on graphs", J. ACM 23(2), 1976.

mod blossom;
mod edges;
mod rematch;
mod search;
mod state;
mod types;
mod worklist;

pub use blossom::assign_edge_labels;
pub use edges::EdgeStore;
pub use rematch::rematch;
pub use search::{search_from, Matching};
pub use state::{FirstMap, LabelState};
pub use types::{
    EdgeId, Label, MatchCfg, MatchingError, RunStats, SearchOutcome, Vertex, SENTINEL,
};
pub use worklist::OuterWorklist;

#[cfg(test)]
mod tests;
