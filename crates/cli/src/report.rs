//! JSON matching reports plus a provenance sidecar next to each report.

use anyhow::{Context, Result};
use blossom::{Matching, RunStats, Vertex};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct MatchingReport {
    pub vertices: usize,
    pub edges: usize,
    pub matched_vertices: usize,
    pub cardinality: usize,
    pub searches: usize,
    pub augmentations: usize,
    pub pairs: Vec<(Vertex, Vertex)>,
    pub unmatched: Vec<Vertex>,
}

impl MatchingReport {
    pub fn new(m: &Matching, stats: RunStats) -> Self {
        Self {
            vertices: m.nvertex(),
            edges: m.nedge(),
            matched_vertices: m.matching_size(),
            cardinality: m.cardinality(),
            searches: stats.searches,
            augmentations: stats.augmentations,
            pairs: m.pairs(),
            unmatched: m.unmatched(),
        }
    }
}

/// Write `report` to `out` and `<stem>.provenance.json` beside it.
/// Returns the sidecar path.
#[track_caller]
pub fn write_report(out: &Path, report: &MatchingReport, params: Value) -> Result<PathBuf> {
    let callsite = Location::caller();
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = sidecar_path(out);
    let doc = json!({
        "code_rev": current_git_rev(),
        "engine": blossom::VERSION,
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "params": params,
        "outputs": [out.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::info!(
        out = %out.display(),
        matched = report.matched_vertices,
        "report_written"
    );
    Ok(sidecar)
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir {}", parent.display())),
        _ => Ok(()),
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "report".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the running code: `GIT_COMMIT` at build or run time, else `git`.
fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
