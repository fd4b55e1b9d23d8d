//! Merges the TOML config file with command-line overrides.
//!
//! ```toml
//! # comparison.toml
//! [input]
//! header_rows = 1
//!
//! [groups]
//! EKI = "MN1-Ib_EKI.csv"
//! WT = "MN1-Ib_WT.csv"
//! ```

use anyhow::{Context, Result};
use burst_stats::report::ComparisonConfig;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A `NAME=PATH` group given on the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupArg {
    /// Group label
    pub name: String,
    /// Burst table path
    pub path: PathBuf,
}

impl FromStr for GroupArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => Ok(Self {
                name: name.trim().to_string(),
                path: PathBuf::from(path.trim()),
            }),
            _ => Err(format!("Expected NAME=PATH, got '{}'", s)),
        }
    }
}

/// Load the config file (if any), then apply flag overrides
pub fn resolve(
    config: Option<&Path>,
    groups: Vec<GroupArg>,
    header_rows: Option<usize>,
) -> Result<ComparisonConfig> {
    let mut resolved = match config {
        Some(path) => ComparisonConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => ComparisonConfig::default(),
    };

    for group in groups {
        resolved = resolved.with_group(group.name, group.path);
    }

    if let Some(rows) = header_rows {
        resolved.input.header_rows = rows;
    }

    Ok(resolved)
}
