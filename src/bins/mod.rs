//! # Bin Specification
//!
//! Every measure is binned against a fixed edge sequence generated from
//! `(min, max, step)` on the half-open interval `[min, max)`. One [`BinSpec`]
//! is built per analysis run and shared read-only by every group in the
//! comparison, which keeps CDFs and histograms comparable.
//!
//! Default ranges:
//!
//! | Measure | min | max | step |
//! |---------|-----|-----|------|
//! | `burstDur` | 1 | 50 | 1.0 |
//! | `cycleDur` | 1 | 50 | 1.0 |
//! | `dutyCycle` | 0 | 1.0 | 0.04 |
//! | `qI` | 0 | 50 | 1.0 |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::measures::MeasureKind;


/// Upper bound on the number of edges one measure may generate
pub const MAX_EDGES: usize = 1_000_000;

/// Invalid binning parameters, rejected before any aggregation runs
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Step must be strictly positive
    #[error("Bin step for '{measure}' must be positive, got {step}")]
    NonPositiveStep {
        /// Offending measure
        measure: MeasureKind,
        /// Configured step
        step: f64,
    },

    /// Range must satisfy min < max
    #[error("Bin range for '{measure}' is empty: min {min} >= max {max}")]
    EmptyRange {
        /// Offending measure
        measure: MeasureKind,
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },

    /// All parameters must be finite numbers
    #[error("Bin parameters for '{measure}' must be finite")]
    NonFinite {
        /// Offending measure
        measure: MeasureKind,
    },

    /// Step vanishes when added to `min`
    #[error("Bin step {step} for '{measure}' is too small to advance from {min}")]
    StepTooSmall {
        /// Offending measure
        measure: MeasureKind,
        /// Configured lower bound
        min: f64,
        /// Configured step
        step: f64,
    },

    /// Range and step would generate more than [`MAX_EDGES`] edges
    #[error("Bin range for '{measure}' would generate {count} edges, limit is {limit}", limit = MAX_EDGES)]
    TooManyBins {
        /// Offending measure
        measure: MeasureKind,
        /// Edge count implied by the range and step (saturating)
        count: usize,
    },
}

/// Range and width of one measure's bins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinRange {
    /// First edge (inclusive)
    pub min: f64,
    /// Upper bound (exclusive)
    pub max: f64,
    /// Distance between consecutive edges
    pub step: f64,
}

impl BinRange {
    /// Create a range
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    fn validate(&self, measure: MeasureKind) -> Result<(), ConfigurationError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(ConfigurationError::NonFinite { measure });
        }
        if self.step <= 0.0 {
            return Err(ConfigurationError::NonPositiveStep {
                measure,
                step: self.step,
            });
        }
        if self.min >= self.max {
            return Err(ConfigurationError::EmptyRange {
                measure,
                min: self.min,
                max: self.max,
            });
        }
        if self.min + self.step == self.min {
            return Err(ConfigurationError::StepTooSmall {
                measure,
                min: self.min,
                step: self.step,
            });
        }
        let span = ((self.max - self.min) / self.step).ceil();
        if span > MAX_EDGES as f64 {
            return Err(ConfigurationError::TooManyBins {
                measure,
                count: span as usize,
            });
        }
        Ok(())
    }

    /// Edges `min + i * step` for every `i` whose edge stays below `max`.
    ///
    /// Never generates more than [`MAX_EDGES`] edges; [`BinSpec::new`] rejects
    /// ranges that would need more.
    pub fn edges(&self) -> Vec<f64> {
        let span = ((self.max - self.min) / self.step).ceil();
        let mut count = if span > 0.0 {
            span.min(MAX_EDGES as f64) as usize
        } else {
            0
        };
        // (max - min) / step can round up past an integer, e.g. 1.0 / 0.04
        while count > 0 && self.min + (count - 1) as f64 * self.step >= self.max {
            count -= 1;
        }
        (0..count).map(|i| self.min + i as f64 * self.step).collect()
    }
}

/// Per-measure bin parameters, as read from configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinConfig {
    /// Burst duration bins
    #[serde(rename = "burstDur")]
    pub burst_duration: BinRange,
    /// Cycle duration bins
    #[serde(rename = "cycleDur")]
    pub cycle_duration: BinRange,
    /// Duty cycle bins
    #[serde(rename = "dutyCycle")]
    pub duty_cycle: BinRange,
    /// Quiescence interval bins
    #[serde(rename = "qI")]
    pub quiescence_interval: BinRange,
}

impl Default for BinConfig {
    fn default() -> Self {
        Self {
            burst_duration: BinRange::new(1.0, 50.0, 1.0),
            cycle_duration: BinRange::new(1.0, 50.0, 1.0),
            duty_cycle: BinRange::new(0.0, 1.0, 0.04),
            quiescence_interval: BinRange::new(0.0, 50.0, 1.0),
        }
    }
}

impl BinConfig {
    /// Parameters for one measure
    pub fn range(&self, kind: MeasureKind) -> BinRange {
        match kind {
            MeasureKind::BurstDuration => self.burst_duration,
            MeasureKind::CycleDuration => self.cycle_duration,
            MeasureKind::DutyCycle => self.duty_cycle,
            MeasureKind::QuiescenceInterval => self.quiescence_interval,
        }
    }

    /// Mutable parameters for one measure
    pub fn range_mut(&mut self, kind: MeasureKind) -> &mut BinRange {
        match kind {
            MeasureKind::BurstDuration => &mut self.burst_duration,
            MeasureKind::CycleDuration => &mut self.cycle_duration,
            MeasureKind::DutyCycle => &mut self.duty_cycle,
            MeasureKind::QuiescenceInterval => &mut self.quiescence_interval,
        }
    }
}

/// Validated bin edges for every measure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinSpec {
    ranges: BTreeMap<MeasureKind, BinRange>,
    edges: BTreeMap<MeasureKind, Vec<f64>>,
}

impl BinSpec {
    /// Validate `config` and generate the edges
    pub fn new(config: &BinConfig) -> Result<Self, ConfigurationError> {
        let mut ranges = BTreeMap::new();
        let mut edges = BTreeMap::new();

        for kind in MeasureKind::ALL {
            let range = config.range(kind);
            range.validate(kind)?;
            ranges.insert(kind, range);
            edges.insert(kind, range.edges());
        }

        Ok(Self { ranges, edges })
    }

    /// Bins built from the default ranges
    pub fn standard() -> Self {
        let config = BinConfig::default();
        let ranges: BTreeMap<_, _> = MeasureKind::ALL
            .into_iter()
            .map(|kind| (kind, config.range(kind)))
            .collect();
        let edges = ranges
            .iter()
            .map(|(kind, range)| (*kind, range.edges()))
            .collect();

        Self { ranges, edges }
    }

    /// Bin edges for a measure
    pub fn edges(&self, kind: MeasureKind) -> &[f64] {
        self.edges.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parameters a measure's edges were generated from
    pub fn range(&self, kind: MeasureKind) -> Option<&BinRange> {
        self.ranges.get(&kind)
    }

    /// Edges for every measure, in name order
    pub fn iter(&self) -> impl Iterator<Item = (MeasureKind, &[f64])> {
        self.edges.iter().map(|(kind, edges)| (*kind, edges.as_slice()))
    }
}

impl Default for BinSpec {
    fn default() -> Self {
        Self::standard()
    }
}
