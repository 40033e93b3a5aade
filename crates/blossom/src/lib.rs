//! Maximum-cardinality matching in general graphs.
//!
//! Modules
//! - `matching`: the engine (edge store, label state, blossom labeling,
//!   rematching, search driver) and the `Matching` object callers use.
//! - `verify`: post-run well-formedness and maximality checks.
//! - `gen`: reproducible random and structured graph families.
//!
//! Vertices are numbered `1..=V`; `0` is reserved.

pub mod gen;
pub mod matching;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use matching::{EdgeId, MatchCfg, Matching, MatchingError, RunStats, Vertex};
pub use verify::{verify_matching, VerifyError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{
        blossom_chain, complete, cycle, draw_gnp, path, RandomGraph, RandomGraphCfg,
        ReplayToken, VertexCount,
    };
    pub use crate::matching::{EdgeId, MatchCfg, Matching, MatchingError, RunStats, Vertex};
    pub use crate::verify::{verify_matching, VerifyError};
}
