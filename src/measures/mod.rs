//! # Burst Measures
//!
//! Derives timing measures from one trial's alternating start/stop sequence.
//! With `n` bursts:
//!
//! | Measure | Formula | Length |
//! |---------|---------|--------|
//! | burst duration | `stop[i] - start[i]` | `n` |
//! | cycle duration | `start[i+1] - start[i]` | `n - 1` |
//! | burst frequency | `1 / cycle[i]`, final cycle excluded | `n - 2` |
//! | duty cycle | `burst[i] / cycle[i]` | `n - 1` |
//! | quiescence interval | `start[i+1] - stop[i]` | `n - 1` |
//!
//! Trials with fewer than two bursts are degenerate: the cycle-based
//! sequences come out empty and the trial contributes no samples to them.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::loader::Trial;

#[cfg(test)]
mod tests;

/// Measures that are binned and compared across groups.
///
/// Variant order matches the sorted measure names, so ordered collections
/// keyed by `MeasureKind` iterate deterministically by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeasureKind {
    /// Time from the start to the end of a burst
    #[serde(rename = "burstDur")]
    BurstDuration,
    /// Time from the start of one burst to the start of the next
    #[serde(rename = "cycleDur")]
    CycleDuration,
    /// Fraction of a cycle occupied by its burst
    #[serde(rename = "dutyCycle")]
    DutyCycle,
    /// Silent gap between the end of a burst and the next start
    #[serde(rename = "qI")]
    QuiescenceInterval,
}

impl MeasureKind {
    /// All binned measures, in name order
    pub const ALL: [MeasureKind; 4] = [
        MeasureKind::BurstDuration,
        MeasureKind::CycleDuration,
        MeasureKind::DutyCycle,
        MeasureKind::QuiescenceInterval,
    ];

    /// Short name used in configuration and output files
    pub fn name(&self) -> &'static str {
        match self {
            MeasureKind::BurstDuration => "burstDur",
            MeasureKind::CycleDuration => "cycleDur",
            MeasureKind::DutyCycle => "dutyCycle",
            MeasureKind::QuiescenceInterval => "qI",
        }
    }

    /// Long name for presentation
    pub fn title(&self) -> &'static str {
        match self {
            MeasureKind::BurstDuration => "Burst duration",
            MeasureKind::CycleDuration => "Cycle duration",
            MeasureKind::DutyCycle => "Duty cycle",
            MeasureKind::QuiescenceInterval => "Quiescence interval",
        }
    }

    /// Unit of the measure's samples
    pub fn unit(&self) -> &'static str {
        match self {
            MeasureKind::DutyCycle => "fraction",
            _ => "secs",
        }
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MeasureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasureKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = MeasureKind::ALL.iter().map(|k| k.name()).collect();
                format!("Unknown measure '{}'. Valid options: {}", s, names.join(", "))
            })
    }
}

/// Derived measure sequences for one trial
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasureSet {
    /// Number of bursts the measures were derived from
    pub burst_count: usize,
    /// One entry per burst
    pub burst_duration: Vec<f64>,
    /// One entry per consecutive pair of bursts
    pub cycle_duration: Vec<f64>,
    /// Reciprocal cycle duration, final cycle excluded
    pub burst_frequency: Vec<f64>,
    /// Burst duration over cycle duration
    pub duty_cycle: Vec<f64>,
    /// Gap between a stop and the next start
    pub quiescence_interval: Vec<f64>,
}

impl MeasureSet {
    /// Samples of a binned measure
    pub fn samples(&self, kind: MeasureKind) -> &[f64] {
        match kind {
            MeasureKind::BurstDuration => &self.burst_duration,
            MeasureKind::CycleDuration => &self.cycle_duration,
            MeasureKind::DutyCycle => &self.duty_cycle,
            MeasureKind::QuiescenceInterval => &self.quiescence_interval,
        }
    }

    /// Fewer than two bursts: no cycle-based measures
    pub fn is_degenerate(&self) -> bool {
        self.burst_count < 2
    }
}

/// Computes [`MeasureSet`]s from trials
#[derive(Debug, Clone, Copy, Default)]
pub struct BurstMeasureCalculator;

impl BurstMeasureCalculator {
    /// Create a calculator
    pub fn new() -> Self {
        Self
    }

    /// Derive all measures for one trial.
    ///
    /// Trials are strictly increasing, so no cycle duration is zero and the
    /// ratios are always defined.
    pub fn compute(&self, trial: &Trial) -> MeasureSet {
        let starts: Vec<f64> = trial.starts().collect();
        let stops: Vec<f64> = trial.stops().collect();
        let burst_count = starts.len();

        let burst_duration: Vec<f64> = starts
            .iter()
            .zip(&stops)
            .map(|(start, stop)| stop - start)
            .collect();

        let cycle_duration: Vec<f64> = starts.windows(2).map(|w| w[1] - w[0]).collect();

        let burst_frequency: Vec<f64> = cycle_duration
            .iter()
            .take(cycle_duration.len().saturating_sub(1))
            .map(|cycle| 1.0 / cycle)
            .collect();

        // burst_duration is one longer than cycle_duration; zip truncates it
        let duty_cycle: Vec<f64> = burst_duration
            .iter()
            .zip(&cycle_duration)
            .map(|(burst, cycle)| burst / cycle)
            .collect();

        let quiescence_interval: Vec<f64> = starts
            .iter()
            .skip(1)
            .zip(&stops)
            .map(|(next_start, stop)| next_start - stop)
            .collect();

        let measures = MeasureSet {
            burst_count,
            burst_duration,
            cycle_duration,
            burst_frequency,
            duty_cycle,
            quiescence_interval,
        };

        if measures.is_degenerate() {
            warn!(
                "Trial '{}' has {} burst(s); cycle-based measures are empty",
                trial.id(),
                burst_count
            );
        }

        debug!(
            "Trial '{}': burst durations {:?}, cycle durations {:?}, duty cycles {:?}, quiescence intervals {:?}",
            trial.id(),
            measures.burst_duration,
            measures.cycle_duration,
            measures.duty_cycle,
            measures.quiescence_interval
        );

        measures
    }

    /// Derive measures for every trial, preserving order
    pub fn compute_all(&self, trials: &[Trial]) -> Vec<MeasureSet> {
        trials.iter().map(|trial| self.compute(trial)).collect()
    }
}
