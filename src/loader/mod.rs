//! # Burst Interval Loading
//!
//! Turns tabular burst tables into validated [`Trial`]s. Each data row holds a
//! trial identifier followed by alternating burst start/stop timestamps in
//! seconds:
//!
//! ```text
//! trial,timestamps
//! t1,2.0,4.0,6.0,10.0,12.0,13.0
//! t2,1.5 3.0 7.25 9.0
//! ```
//!
//! Other producers of burst boundaries (for example readers of raw
//! electrophysiology recordings) plug in through the [`TrialSource`] trait.

mod csv_source;
mod error;
mod trial;

#[cfg(test)]
mod tests;

pub use csv_source::{IntervalLoader, LoaderConfig};
pub use error::{LoaderError, TrialError};
pub use trial::Trial;

/// Anything that can produce a batch of trials
pub trait TrialSource {
    /// Load every trial; a single malformed trial fails the whole batch
    fn load_trials(&self) -> Result<Vec<Trial>, LoaderError>;

    /// Human-readable origin, used in log messages
    fn describe(&self) -> String {
        String::from("<in-memory>")
    }
}

impl TrialSource for Vec<Trial> {
    fn load_trials(&self) -> Result<Vec<Trial>, LoaderError> {
        Ok(self.clone())
    }
}
