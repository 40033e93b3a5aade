//! Graph families for tests, benchmarks and the CLI (random + structured).
//!
//! Model
//! - `draw_gnp`: G(n, p) edge lists. Determinism uses a replay token
//!   `(seed, index)` mixed into a single RNG, so sample `index` of a stream
//!   can be regenerated on its own.
//! - Structured families (`cycle`, `path`, `complete`, `blossom_chain`) have
//!   known maximum matchings and exercise nested blossoms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matching::{Matching, MatchingError, Vertex};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// G(n, p) sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub vertex_count: VertexCount,
    /// Probability of each unordered pair being an edge. Clamped to [0, 1].
    pub edge_prob: f64,
}
impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(32),
            edge_prob: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// An edge list on vertices `1..=nvertex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomGraph {
    pub nvertex: usize,
    pub edges: Vec<(Vertex, Vertex)>,
}

impl RandomGraph {
    pub fn into_matching(self) -> Result<Matching, MatchingError> {
        Matching::from_edges(self.nvertex, self.edges)
    }
}

/// Draw a G(n, p) graph.
pub fn draw_gnp(cfg: RandomGraphCfg, tok: ReplayToken) -> RandomGraph {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let p = cfg.edge_prob.clamp(0.0, 1.0);
    let mut edges = Vec::new();
    for v in 1..=n {
        for w in (v + 1)..=n {
            if rng.gen_bool(p) {
                edges.push((v, w));
            }
        }
    }
    RandomGraph { nvertex: n, edges }
}

/// Cycle `1-2-...-n-1` (needs `n >= 3` to be simple).
pub fn cycle(n: usize) -> RandomGraph {
    let mut g = path(n);
    if n >= 3 {
        g.edges.push((n, 1));
    }
    g
}

/// Path `1-2-...-n`.
pub fn path(n: usize) -> RandomGraph {
    RandomGraph {
        nvertex: n,
        edges: (1..n).map(|v| (v, v + 1)).collect(),
    }
}

pub fn complete(n: usize) -> RandomGraph {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for v in 1..=n {
        for w in (v + 1)..=n {
            edges.push((v, w));
        }
    }
    RandomGraph { nvertex: n, edges }
}

/// `k` triangles, consecutive ones joined by a stem edge, plus a pendant
/// vertex on the first triangle. Has `3k + 1` vertices and a matching that
/// leaves at most one of them single (perfect when `k` is odd).
pub fn blossom_chain(k: usize) -> RandomGraph {
    let nvertex = 3 * k + 1;
    let mut edges = Vec::new();
    for t in 0..k {
        let a = 3 * t + 1;
        edges.push((a, a + 1));
        edges.push((a + 1, a + 2));
        edges.push((a + 2, a));
        if t + 1 < k {
            edges.push((a + 2, a + 3));
        }
    }
    if k > 0 {
        edges.push((1, nvertex));
    }
    RandomGraph { nvertex, edges }
}
