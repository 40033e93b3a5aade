//! Timing probe: maximum matching on one dense random graph.
//!
//! Prints sizes and wall time so scaling claims can be checked against a
//! concrete run instead of estimates.

use std::time::Instant;

use blossom::gen::{draw_gnp, RandomGraphCfg, ReplayToken, VertexCount};
use blossom::{verify_matching, MatchCfg, Matching};

fn main() {
    let cfg = RandomGraphCfg {
        vertex_count: VertexCount::Fixed(2000),
        edge_prob: 0.05,
    };
    let g = draw_gnp(cfg, ReplayToken { seed: 7, index: 0 });
    let nedge = g.edges.len();
    let mut m = Matching::with_cfg(g.nvertex, MatchCfg { verify: false });
    for (v, w) in g.edges {
        m.add_edge(v, w).expect("generated edges are in range");
    }

    let start = Instant::now();
    let stats = m.run();
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    verify_matching(&m).expect("matching verifies");

    println!("vertices={} edges={nedge}", m.nvertex());
    println!(
        "matched_vertices={} searches={} augmentations={}",
        m.matching_size(),
        stats.searches,
        stats.augmentations
    );
    println!("run_time_ms={elapsed:.3}");
}
