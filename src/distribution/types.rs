use serde::{Deserialize, Serialize};

use super::{column_mean, is_non_decreasing};

/// Per-trial empirical CDFs evaluated at shared bin edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdfTable {
    /// Thresholds the CDFs are evaluated at
    pub edges: Vec<f64>,
    /// One row per trial, one column per edge
    pub rows: Vec<Vec<f64>>,
}

impl CdfTable {
    /// Number of trials
    pub fn trial_count(&self) -> usize {
        self.rows.len()
    }

    /// Column-wise mean over trials
    pub fn mean(&self) -> Vec<f64> {
        column_mean(&self.rows, self.edges.len())
    }

    /// Every row is non-decreasing
    pub fn is_monotonic(&self) -> bool {
        self.rows.iter().all(|row| is_non_decreasing(row))
    }
}

/// Relative-frequency histograms for a group of trials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelFreqHistogram {
    /// Bucket boundaries; bucket `i` spans `edges[i]..edges[i+1]`
    pub edges: Vec<f64>,
    /// One row per trial, one column per bucket
    pub rel_freqs: Vec<Vec<f64>>,
    /// Column-wise mean of `rel_freqs`
    pub avg_rel_freq: Vec<f64>,
}

impl RelFreqHistogram {
    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.avg_rel_freq.len()
    }

    /// Left edge of every bucket
    pub fn bucket_lefts(&self) -> &[f64] {
        &self.edges[..self.bucket_count().min(self.edges.len())]
    }

    /// Width of every bucket
    pub fn bucket_widths(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| w[1] - w[0]).collect()
    }
}
