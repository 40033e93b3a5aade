mod edgelist;
mod pairing;
mod report;

use anyhow::{Context, Result};
use blossom::gen::{draw_gnp, RandomGraphCfg, ReplayToken, VertexCount};
use blossom::Matching;
use clap::{Parser, Subcommand};
use report::{write_report, MatchingReport};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "blossom")]
#[command(about = "Maximum-cardinality matching on general graphs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Match an edge list (CSV with header, or Parquet; first two columns)
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Vertex count; defaults to the largest endpoint id
        #[arg(long)]
        vertices: Option<usize>,
    },
    /// Match a reproducible G(n, p) sample
    Random {
        #[arg(long)]
        vertices: usize,
        #[arg(long, default_value_t = 0.1)]
        edge_prob: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Pair items whose counts do not sum to a power of two; print how many stay unpaired
    PairCounts {
        #[arg(long, value_delimiter = ',', required = true)]
        counts: Vec<u64>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            vertices,
        } => run(input, out, vertices),
        Action::Random {
            vertices,
            edge_prob,
            seed,
            index,
            out,
        } => random(vertices, edge_prob, seed, index, out),
        Action::PairCounts { counts } => pair_counts(counts),
    }
}

fn run(input: PathBuf, out: PathBuf, vertices: Option<usize>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?vertices, "run");
    let edges = edgelist::read_edge_list(&input)?;
    let nvertex = vertices.unwrap_or_else(|| {
        edges
            .iter()
            .map(|&(v, w)| v.max(w))
            .max()
            .unwrap_or(0)
    });
    let mut m = Matching::from_edges(nvertex, edges)
        .with_context(|| format!("building graph from {}", input.display()))?;
    let stats = m.run();
    let report = MatchingReport::new(&m, stats);
    let params = json!({
        "input": input.to_string_lossy(),
        "vertices": nvertex,
    });
    write_report(&out, &report, params)?;
    Ok(())
}

fn random(vertices: usize, edge_prob: f64, seed: u64, index: u64, out: PathBuf) -> Result<()> {
    tracing::info!(vertices, edge_prob, seed, index, "random");
    let cfg = RandomGraphCfg {
        vertex_count: VertexCount::Fixed(vertices),
        edge_prob,
    };
    let mut m = draw_gnp(cfg, ReplayToken { seed, index }).into_matching()?;
    let stats = m.run();
    let report = MatchingReport::new(&m, stats);
    let params = json!({
        "vertices": vertices,
        "edge_prob": edge_prob,
        "seed": seed,
        "index": index,
    });
    write_report(&out, &report, params)?;
    Ok(())
}

fn pair_counts(counts: Vec<u64>) -> Result<()> {
    let left = pairing::unpaired(&counts)?;
    println!("{left}");
    Ok(())
}
