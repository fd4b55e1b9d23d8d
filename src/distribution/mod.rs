//! # Empirical Distributions
//!
//! Bins per-trial samples against shared edges and aggregates them per group:
//!
//! - [`compute_cdfs`]: fraction of each trial's samples at or below every edge
//! - [`compute_avg_rel_freq`]: per-trial relative-frequency histograms and
//!   their column-wise mean
//!
//! A trial with zero samples yields an all-zero row (0/0 is taken as 0) and
//! still counts toward group means.
//!
//! Histogram buckets follow the usual convention: bucket `i` is
//! `[edges[i], edges[i+1])`, except the last, which also includes its right
//! edge. Samples outside `[edges[0], edges[last]]` fall in no bucket but still
//! count in the trial's denominator.

mod types;


pub use types::{CdfTable, RelFreqHistogram};

/// Fraction of `samples` at or below each edge
pub fn empirical_cdf(samples: &[f64], edges: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return vec![0.0; edges.len()];
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let total = sorted.len() as f64;

    edges
        .iter()
        .map(|edge| sorted.partition_point(|s| s <= edge) as f64 / total)
        .collect()
}

/// Per-trial CDFs (trials x edges)
pub fn compute_cdfs<S: AsRef<[f64]>>(sample_sets: &[S], edges: &[f64]) -> CdfTable {
    let rows = sample_sets
        .iter()
        .map(|samples| empirical_cdf(samples.as_ref(), edges))
        .collect();

    CdfTable {
        edges: edges.to_vec(),
        rows,
    }
}

/// Sample counts per bucket; `edges.len() - 1` buckets
pub fn histogram_counts(samples: &[f64], edges: &[f64]) -> Vec<usize> {
    let buckets = edges.len().saturating_sub(1);
    let mut counts = vec![0usize; buckets];
    if buckets == 0 {
        return counts;
    }

    let (first, last) = (edges[0], edges[buckets]);
    for &value in samples {
        if !(first..=last).contains(&value) {
            continue;
        }
        let bucket = (edges.partition_point(|e| *e <= value) - 1).min(buckets - 1);
        counts[bucket] += 1;
    }

    counts
}

/// Counts divided by the trial's total sample count
pub fn relative_frequencies(samples: &[f64], edges: &[f64]) -> Vec<f64> {
    let counts = histogram_counts(samples, edges);
    if samples.is_empty() {
        return vec![0.0; counts.len()];
    }

    let total = samples.len() as f64;
    counts.into_iter().map(|c| c as f64 / total).collect()
}

/// Per-trial relative frequencies and their mean over all trials
pub fn compute_avg_rel_freq<S: AsRef<[f64]>>(edges: &[f64], sample_sets: &[S]) -> RelFreqHistogram {
    let rel_freqs: Vec<Vec<f64>> = sample_sets
        .iter()
        .map(|samples| relative_frequencies(samples.as_ref(), edges))
        .collect();

    let avg_rel_freq = column_mean(&rel_freqs, edges.len().saturating_sub(1));

    RelFreqHistogram {
        edges: edges.to_vec(),
        rel_freqs,
        avg_rel_freq,
    }
}

/// Column-wise arithmetic mean of equal-width rows; zeros when there are no rows
pub fn column_mean(rows: &[Vec<f64>], width: usize) -> Vec<f64> {
    let mut sums = vec![0.0; width];
    if rows.is_empty() {
        return sums;
    }

    for row in rows {
        for (sum, value) in sums.iter_mut().zip(row) {
            *sum += value;
        }
    }

    let n = rows.len() as f64;
    sums.iter_mut().for_each(|sum| *sum /= n);
    sums
}

/// True when no element is smaller than its predecessor
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}
