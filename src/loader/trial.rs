use serde::{Deserialize, Serialize};

use super::TrialError;

/// One recording's burst boundaries.
///
/// Timestamps alternate start, stop, start, stop, ... and are strictly
/// increasing, so every burst has `stop > start` and every following start
/// lies after the preceding stop. A trial is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    id: String,
    timestamps: Vec<f64>,
}

impl Trial {
    /// Build a trial, validating the alternating start/stop invariant
    pub fn new(id: impl Into<String>, timestamps: Vec<f64>) -> Result<Self, TrialError> {
        if timestamps.len() % 2 != 0 {
            return Err(TrialError::OddLength(timestamps.len()));
        }

        if let Some(index) = timestamps.iter().position(|t| !t.is_finite()) {
            return Err(TrialError::NonFinite { index });
        }

        if let Some(index) = (1..timestamps.len()).find(|&i| timestamps[i] <= timestamps[i - 1]) {
            return Err(TrialError::NotIncreasing {
                index,
                previous: timestamps[index - 1],
                value: timestamps[index],
            });
        }

        Ok(Self {
            id: id.into(),
            timestamps,
        })
    }

    /// Trial identifier (first column of the source row)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw alternating start/stop timestamps
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Number of complete bursts
    pub fn burst_count(&self) -> usize {
        self.timestamps.len() / 2
    }

    /// Burst starts (even positions)
    pub fn starts(&self) -> impl Iterator<Item = f64> + '_ {
        self.timestamps.iter().step_by(2).copied()
    }

    /// Burst stops (odd positions)
    pub fn stops(&self) -> impl Iterator<Item = f64> + '_ {
        self.timestamps.iter().skip(1).step_by(2).copied()
    }
}
