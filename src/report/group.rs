use crate::loader::Trial;
use crate::measures::{BurstMeasureCalculator, MeasureKind, MeasureSet};

/// A labelled collection of trials with their derived measures
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    trials: Vec<Trial>,
    measures: Vec<MeasureSet>,
}

impl Group {
    /// Derive every trial's measures once, up front
    pub fn new(name: impl Into<String>, trials: Vec<Trial>) -> Self {
        let measures = BurstMeasureCalculator::new().compute_all(&trials);
        Self {
            name: name.into(),
            trials,
            measures,
        }
    }

    /// Group label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trials in source order
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Measure sets, parallel to [`Group::trials`]
    pub fn measure_sets(&self) -> &[MeasureSet] {
        &self.measures
    }

    /// One sample slice per trial for a measure
    pub fn samples(&self, kind: MeasureKind) -> Vec<&[f64]> {
        self.measures.iter().map(|m| m.samples(kind)).collect()
    }

    /// Indices of trials with fewer than two bursts
    pub fn degenerate_trials(&self) -> Vec<usize> {
        self.measures
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_degenerate())
            .map(|(i, _)| i)
            .collect()
    }
}
