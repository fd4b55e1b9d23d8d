//! # burst-stats - Descriptive Statistics of Neuronal Bursting
//!
//! `burst-stats` turns recorded burst start/stop times into timing measures and
//! empirical distributions, and compares those distributions between
//! experimental groups (for example wild-type vs. mutant preparations).
//!
//! ## Pipeline
//!
//! ```text
//! burst table ──► IntervalLoader ──► Trial ──► BurstMeasureCalculator ──► MeasureSet
//!                                                                           │
//!                          BinSpec ───────────────────────────────┐         │
//!                                                                  ▼         ▼
//!                                              compute_cdfs / compute_avg_rel_freq
//!                                                                  │
//!                                                                  ▼
//!                                                          ComparisonReport
//! ```
//!
//! Data flows strictly forward. Trials are immutable once parsed, measure sets
//! are derived once per trial, and one bin specification is shared by every
//! group of a comparison.
//!
//! ## Quick Start
//!
//! ```rust
//! use burst_stats::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let mut groups = BTreeMap::new();
//! groups.insert(
//!     "WT".to_string(),
//!     vec![Trial::new("t1", vec![2.0, 4.0, 6.0, 10.0, 12.0, 13.0])?],
//! );
//!
//! let report = GroupComparisonReport::new(BinSpec::standard()).run(&groups)?;
//! let wt = report.group("WT")?;
//! let avg = &wt.measures[&MeasureKind::BurstDuration].rel_freq.avg_rel_freq;
//! assert_eq!(avg.len(), 48);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Measures
//!
//! | Name | Meaning |
//! |------|---------|
//! | `burstDur` | time from the start to the end of a burst |
//! | `cycleDur` | time from one burst start to the next |
//! | `dutyCycle` | burst duration divided by cycle duration |
//! | `qI` | quiescence interval: end of a burst to the next start |
//!
//! Burst frequency (reciprocal cycle duration) is also derived for every trial.
//!
//! ## Architecture
//!
//! - [`loader`]: burst table parsing and the [`loader::TrialSource`] seam
//! - [`measures`]: per-trial measure derivation
//! - [`bins`]: configurable bin edges per measure
//! - [`distribution`]: empirical CDFs and relative-frequency histograms
//! - [`report`]: group comparison, summary and export

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod bins;
pub mod distribution;
pub mod loader;
pub mod measures;
pub mod report;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::bins::{BinConfig, BinRange, BinSpec, ConfigurationError};
    pub use crate::distribution::{
        compute_avg_rel_freq, compute_cdfs, histogram_counts, CdfTable, RelFreqHistogram,
    };
    pub use crate::loader::{IntervalLoader, LoaderConfig, LoaderError, Trial, TrialSource};
    pub use crate::measures::{BurstMeasureCalculator, MeasureKind, MeasureSet};
    pub use crate::report::{
        ComparisonConfig, ComparisonReport, Group, GroupComparisonReport, GroupDistributions,
        MeasureDistribution, ReportError,
    };
}
