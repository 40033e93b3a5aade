//! Pairing items by count: items `i` and `j` may be paired when
//! `counts[i] + counts[j]` is not a power of two (a zero sum never pairs).

use blossom::{Matching, MatchingError};

pub fn compatible(a: u64, b: u64) -> bool {
    let s = a as u128 + b as u128;
    s & s.wrapping_sub(1) != 0
}

/// Number of items left without a partner in a maximum pairing.
pub fn unpaired(counts: &[u64]) -> Result<usize, MatchingError> {
    let n = counts.len();
    let mut m = Matching::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if compatible(counts[i], counts[j]) {
                m.add_edge(i + 1, j + 1)?;
            }
        }
    }
    let stats = m.run();
    tracing::info!(items = n, edges = m.nedge(), augmentations = stats.augmentations, "pairing");
    Ok(n - m.matching_size())
}
