//! # Group Comparison
//!
//! Runs named groups of trials through measure derivation and binning with a
//! single shared [`BinSpec`], producing per group and per measure:
//!
//! - the per-trial CDF matrix and its mean,
//! - the per-trial relative-frequency matrix,
//! - the group's average relative frequency per bucket.
//!
//! Groups and measures are kept in name order so output is reproducible.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use burst_stats::report::{ComparisonConfig, GroupComparisonReport};
//! use std::path::Path;
//!
//! let config = ComparisonConfig::from_file(Path::new("comparison.toml"))?;
//! let report = GroupComparisonReport::from_config(&config)?.run_config(&config)?;
//! println!("{}", report);
//! # Ok::<(), burst_stats::report::ReportError>(())
//! ```

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::bins::BinSpec;
use crate::distribution::{compute_avg_rel_freq, compute_cdfs, CdfTable, RelFreqHistogram};
use crate::loader::{Trial, TrialSource};
use crate::measures::MeasureKind;

mod config;
mod error;
pub mod export;
mod group;
mod summary;

#[cfg(test)]
mod tests;

pub use config::ComparisonConfig;
pub use error::ReportError;
pub use group::Group;

/// Distributions of one measure within one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureDistribution {
    /// Shared bin edges
    pub edges: Vec<f64>,
    /// Total samples over all trials
    pub sample_count: usize,
    /// Per-trial CDFs at each edge
    pub cdfs: CdfTable,
    /// Column-wise mean of `cdfs`
    pub mean_cdf: Vec<f64>,
    /// Per-trial and averaged relative frequencies
    pub rel_freq: RelFreqHistogram,
}

/// All measure distributions of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDistributions {
    /// Number of trials in the group
    pub trial_count: usize,
    /// Trial identifiers, in row order of every matrix
    pub trial_ids: Vec<String>,
    /// Indices of trials with fewer than two bursts
    pub degenerate_trials: Vec<usize>,
    /// Distributions keyed by measure
    pub measures: BTreeMap<MeasureKind, MeasureDistribution>,
}

/// One group's average relative frequency per bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverages {
    /// Group label
    pub label: String,
    /// Average relative frequency per bucket
    pub avg_rel_freq: Vec<f64>,
}

/// Average relative frequencies of two groups over the same buckets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramPair {
    /// Compared measure
    pub measure: MeasureKind,
    /// Left edge of each bucket
    pub bucket_lefts: Vec<f64>,
    /// Width of each bucket
    pub bucket_widths: Vec<f64>,
    /// First group's averages
    pub first: GroupAverages,
    /// Second group's averages
    pub second: GroupAverages,
}

/// Result of a group comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// When the comparison was computed
    pub generated_at: DateTime<Utc>,
    /// Bins shared by every group
    pub bins: BinSpec,
    /// Distributions keyed by group label
    pub groups: BTreeMap<String, GroupDistributions>,
}

impl ComparisonReport {
    /// Distributions for one group
    pub fn group(&self, label: &str) -> Result<&GroupDistributions, ReportError> {
        self.groups
            .get(label)
            .ok_or_else(|| ReportError::UnknownGroup(label.to_string()))
    }

    /// One measure's distributions within one group
    pub fn measure(&self, label: &str, measure: MeasureKind) -> Result<&MeasureDistribution, ReportError> {
        self.group(label)?
            .measures
            .get(&measure)
            .ok_or_else(|| ReportError::MissingMeasure {
                group: label.to_string(),
                measure,
            })
    }

    /// Line up two groups' average relative frequencies for one measure
    pub fn pair(&self, first: &str, second: &str, measure: MeasureKind) -> Result<HistogramPair, ReportError> {
        let a = &self.measure(first, measure)?.rel_freq;
        let b = &self.measure(second, measure)?.rel_freq;

        Ok(HistogramPair {
            measure,
            bucket_lefts: a.bucket_lefts().to_vec(),
            bucket_widths: a.bucket_widths(),
            first: GroupAverages {
                label: first.to_string(),
                avg_rel_freq: a.avg_rel_freq.clone(),
            },
            second: GroupAverages {
                label: second.to_string(),
                avg_rel_freq: b.avg_rel_freq.clone(),
            },
        })
    }
}

/// Computes distributions for named groups against one bin specification
#[derive(Debug, Clone)]
pub struct GroupComparisonReport {
    bins: BinSpec,
}

impl GroupComparisonReport {
    /// Compare groups with the given bins
    pub fn new(bins: BinSpec) -> Self {
        Self { bins }
    }

    /// Validate the configured bins
    pub fn from_config(config: &ComparisonConfig) -> Result<Self, ReportError> {
        Ok(Self::new(BinSpec::new(&config.bins)?))
    }

    /// Shared bins
    pub fn bins(&self) -> &BinSpec {
        &self.bins
    }

    /// Load every configured group from disk and compare
    pub fn run_config(&self, config: &ComparisonConfig) -> Result<ComparisonReport, ReportError> {
        self.run_sources(&config.loaders())
    }

    /// Load trials from each source and compare.
    ///
    /// Any load failure aborts the whole comparison.
    pub fn run_sources<S: TrialSource>(&self, sources: &BTreeMap<String, S>) -> Result<ComparisonReport, ReportError> {
        if sources.is_empty() {
            return Err(ReportError::NoGroups);
        }

        let mut groups = Vec::with_capacity(sources.len());
        for (label, source) in sources {
            info!("Loading group '{}' from {}", label, source.describe());
            let trials = source.load_trials().map_err(|err| ReportError::Load {
                group: label.clone(),
                source: err,
            })?;
            groups.push(Group::new(label.clone(), trials));
        }

        self.run_groups(&groups)
    }

    /// Compare in-memory trials keyed by group label
    pub fn run(&self, groups: &BTreeMap<String, Vec<Trial>>) -> Result<ComparisonReport, ReportError> {
        self.run_sources(groups)
    }

    /// Compare already-built groups.
    ///
    /// Labels must be unique.
    pub fn run_groups(&self, groups: &[Group]) -> Result<ComparisonReport, ReportError> {
        if groups.is_empty() {
            return Err(ReportError::NoGroups);
        }

        let mut distributions = BTreeMap::new();
        for group in groups {
            if distributions.contains_key(group.name()) {
                return Err(ReportError::DuplicateGroup(group.name().to_string()));
            }
            distributions.insert(group.name().to_string(), self.distributions(group));
        }

        Ok(ComparisonReport {
            generated_at: Utc::now(),
            bins: self.bins.clone(),
            groups: distributions,
        })
    }

    /// Distributions of every measure for one group
    pub fn distributions(&self, group: &Group) -> GroupDistributions {
        let degenerate_trials = group.degenerate_trials();
        if !degenerate_trials.is_empty() {
            warn!(
                "Group '{}': {} of {} trials have fewer than two bursts",
                group.name(),
                degenerate_trials.len(),
                group.trials().len()
            );
        }

        let measures = self
            .bins
            .iter()
            .map(|(kind, edges)| {
                let samples = group.samples(kind);
                let cdfs = compute_cdfs(&samples, edges);
                if !cdfs.is_monotonic() {
                    warn!("Group '{}': a {} CDF is not non-decreasing", group.name(), kind);
                }
                let rel_freq = compute_avg_rel_freq(edges, &samples);
                let sample_count: usize = samples.iter().map(|s| s.len()).sum();

                debug!(
                    "Group '{}', {}: {} samples over {} buckets",
                    group.name(),
                    kind,
                    sample_count,
                    rel_freq.bucket_count()
                );

                let distribution = MeasureDistribution {
                    edges: edges.to_vec(),
                    sample_count,
                    mean_cdf: cdfs.mean(),
                    cdfs,
                    rel_freq,
                };
                (kind, distribution)
            })
            .collect();

        GroupDistributions {
            trial_count: group.trials().len(),
            trial_ids: group.trials().iter().map(|t| t.id().to_string()).collect(),
            degenerate_trials,
            measures,
        }
    }
}
