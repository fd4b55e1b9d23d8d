/// Reasons a timestamp sequence cannot form a [`Trial`](super::Trial)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrialError {
    /// A burst start has no matching stop
    #[error("odd number of timestamps ({0}): unterminated burst")]
    OddLength(usize),

    /// A timestamp is NaN or infinite
    #[error("timestamp {index} is not finite")]
    NonFinite {
        /// Position of the offending timestamp
        index: usize,
    },

    /// Timestamps must be strictly increasing (start < stop < next start)
    #[error("timestamp {index} ({value}) does not exceed the previous one ({previous})")]
    NotIncreasing {
        /// Position of the offending timestamp
        index: usize,
        /// Value at `index - 1`
        previous: f64,
        /// Value at `index`
        value: f64,
    },
}

/// Errors that can occur while loading burst tables
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// I/O error reading the data source
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// A data row could not be turned into a valid trial
    #[error("Malformed row at line {line} (trial '{trial}'): {reason}")]
    MalformedRow {
        /// 1-based line number in the source
        line: u64,
        /// Identifier from the leading column(s), empty if absent
        trial: String,
        /// What went wrong
        reason: String,
    },
}

impl LoaderError {
    pub(crate) fn malformed(line: u64, trial: &str, reason: impl ToString) -> Self {
        LoaderError::MalformedRow {
            line,
            trial: trial.to_string(),
            reason: reason.to_string(),
        }
    }
}
