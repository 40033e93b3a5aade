//! Edge-list input: the first two integer columns of a CSV (with header) or
//! Parquet file, one edge per row.

use anyhow::{bail, Context, Result};
use blossom::Vertex;
use polars::prelude::*;
use std::path::Path;

pub fn read_edge_list(path: &Path) -> Result<Vec<(Vertex, Vertex)>> {
    let lf = match path.extension().and_then(|ext| ext.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading edge list {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "edge_list");
    edges_from_frame(&df)
}

fn edges_from_frame(df: &DataFrame) -> Result<Vec<(Vertex, Vertex)>> {
    let cols = df.get_columns();
    if cols.len() < 2 {
        bail!("edge list needs two columns, found {}", cols.len());
    }
    let a = cols[0].cast(&DataType::Int64)?;
    let b = cols[1].cast(&DataType::Int64)?;
    a.i64()?
        .into_iter()
        .zip(b.i64()?.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(v), Some(w)) if v > 0 && w > 0 => Ok((v as Vertex, w as Vertex)),
            (v, w) => bail!("row {row}: endpoints must be positive integers, got ({v:?}, {w:?})"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_csv_edge_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "u,v\n1,2\n2,3\n3,1\n").unwrap();
        let edges = read_edge_list(&path).unwrap();
        assert_eq!(edges, vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn rejects_non_positive_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "u,v\n1,2\n0,3\n").unwrap();
        let err = read_edge_list(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
