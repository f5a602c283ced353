// Cross-seed score aggregation.
//
// Seed tables arrive as floating-point means. Every weight is scaled by
// 10 000 and truncated toward zero first; seeds sharing a term are then
// merged by arithmetic mean over those integer scores. The merge is a
// single fold over an explicit term -> scores map, so the result does not
// depend on seed completion order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Scale factor applied to mean TF-IDF weights before integer truncation.
pub const SCORE_SCALE: f64 = 10_000.0;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTerm {
    pub term: String,
    /// Cross-seed mean of the scaled scores, truncated toward zero.
    pub score: i64,
}

/// Merge per-seed score tables into the top-N ranking.
///
/// Sorting is total and deterministic: descending by the (untruncated)
/// cross-seed mean, ascending by term on ties.
pub fn rank_terms(seed_tables: &[BTreeMap<String, f64>], top_n: usize) -> Vec<RankedTerm> {
    let mut scaled: BTreeMap<String, Vec<i64>> = BTreeMap::new();
    for table in seed_tables {
        for (term, weight) in table {
            scaled
                .entry(term.clone())
                .or_default()
                .push((weight * SCORE_SCALE) as i64);
        }
    }

    let mut merged: Vec<(String, f64)> = scaled
        .into_iter()
        .map(|(term, scores)| {
            let mean = scores.iter().sum::<i64>() as f64 / scores.len() as f64;
            (term, mean)
        })
        .collect();

    merged.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    merged.truncate(top_n);

    merged
        .into_iter()
        .map(|(term, mean)| RankedTerm {
            term,
            score: mean as i64,
        })
        .collect()
}
