use crate::bins::ConfigurationError;
use crate::loader::LoaderError;
use crate::measures::MeasureKind;

/// Errors that can occur while building or exporting a comparison
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A group's trials could not be loaded
    #[error("Failed to load group '{group}': {source}")]
    Load {
        /// Group being loaded
        group: String,
        /// Underlying loader failure
        #[source]
        source: LoaderError,
    },

    /// Invalid bin parameters
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Invalid TOML configuration
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// I/O error reading configuration or writing output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A comparison needs at least one group
    #[error("No groups to compare")]
    NoGroups,

    /// Group label not present in the report
    #[error("Unknown group '{0}'")]
    UnknownGroup(String),

    /// Two groups share a label
    #[error("Duplicate group '{0}'")]
    DuplicateGroup(String),

    /// Measure absent from a group's distributions
    #[error("Group '{group}' has no distribution for '{measure}'")]
    MissingMeasure {
        /// Group label
        group: String,
        /// Requested measure
        measure: MeasureKind,
    },

    /// Two group labels map to the same output file stem
    #[error("Groups '{first}' and '{second}' would both be written as '{stem}'")]
    OutputNameCollision {
        /// Label that claimed the stem first
        first: String,
        /// Label that collides with it
        second: String,
        /// Shared file name stem
        stem: String,
    },
}
