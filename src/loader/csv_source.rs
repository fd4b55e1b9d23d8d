use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::{LoaderError, Trial, TrialSource};

/// Layout of a burst table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Number of leading header rows to skip
    pub header_rows: usize,

    /// Column delimiter (a single ASCII character)
    #[serde(with = "delimiter_char")]
    pub delimiter: u8,

    /// Leading non-timestamp columns per row; the first one names the trial
    pub id_columns: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            header_rows: 1,
            delimiter: b',',
            id_columns: 1,
        }
    }
}

/// Reads one [`Trial`] per data row of a delimited burst table.
///
/// Row layout: `id, start, stop, start, stop, ...`. Rows may be ragged and
/// cells may hold several timestamps separated by whitespace or commas.
#[derive(Debug, Clone)]
pub struct IntervalLoader {
    path: PathBuf,
    config: LoaderConfig,
}

impl IntervalLoader {
    /// Loader for the file at `path` using the default layout
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, LoaderConfig::default())
    }

    /// Loader for the file at `path` with an explicit layout
    pub fn with_config<P: AsRef<Path>>(path: P, config: LoaderConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }

    /// Source file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every trial in the file
    pub fn load(&self) -> Result<Vec<Trial>, LoaderError> {
        let file = File::open(&self.path)?;
        let trials = Self::from_reader(BufReader::new(file), &self.config)?;
        debug!("Loaded {} trials from {}", trials.len(), self.path.display());
        Ok(trials)
    }

    /// Parse every trial from a reader.
    ///
    /// Any malformed row aborts the whole load.
    pub fn from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<Trial>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .quote(b'|')
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        let mut trials = Vec::new();

        for (row, record) in csv_reader.byte_records().enumerate() {
            let record = record?;
            if row < config.header_rows {
                continue;
            }

            let line = record.position().map(|p| p.line()).unwrap_or(row as u64 + 1);
            let id = match record.get(0) {
                Some(field) if config.id_columns > 0 => String::from_utf8_lossy(field).trim().to_string(),
                _ => String::new(),
            };

            let mut timestamps = Vec::new();
            for (column, field) in record.iter().enumerate().skip(config.id_columns) {
                let cell = std::str::from_utf8(field).map_err(|e| {
                    LoaderError::malformed(line, &id, format!("invalid UTF-8 in column {}: {}", column + 1, e))
                })?;
                for token in cell
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|t| !t.is_empty())
                {
                    let value: f64 = token.parse().map_err(|_| {
                        LoaderError::malformed(line, &id, format!("non-numeric token '{}'", token))
                    })?;
                    timestamps.push(value);
                }
            }

            let trial =
                Trial::new(id.as_str(), timestamps).map_err(|e| LoaderError::malformed(line, &id, e))?;
            trials.push(trial);
        }

        Ok(trials)
    }
}

impl TrialSource for IntervalLoader {
    fn load_trials(&self) -> Result<Vec<Trial>, LoaderError> {
        self.load()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

mod delimiter_char {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(*value as char)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let s = String::deserialize(deserializer)?;
        let s = if s == "\\t" { "\t" } else { s.as_str() };
        match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(de::Error::custom(format!(
                "delimiter must be a single ASCII character, got '{}'",
                s
            ))),
        }
    }
}
