//! TOML configuration for a group comparison.
//!
//! ```toml
//! # comparison.toml
//! [input]
//! header_rows = 1
//! delimiter = ","
//!
//! [groups]
//! EKI = "MN1-Ib_EKI.csv"
//! WT = "MN1-Ib_WT.csv"
//!
//! [bins.dutyCycle]
//! min = 0.0
//! max = 1.0
//! step = 0.04
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ReportError;
use crate::bins::BinConfig;
use crate::loader::{IntervalLoader, LoaderConfig};

/// Everything needed to run one comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Layout shared by every group's burst table
    pub input: LoaderConfig,

    /// Group label to burst table path
    pub groups: BTreeMap<String, PathBuf>,

    /// Bin parameters per measure
    pub bins: BinConfig,
}

impl ComparisonConfig {
    /// Load configuration from a TOML file.
    ///
    /// Relative group paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str(&content)?;

        if let Some(base) = path.parent() {
            for table in config.groups.values_mut() {
                if table.is_relative() {
                    *table = base.join(&*table);
                }
            }
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ReportError> {
        Ok(toml::from_str(content)?)
    }

    /// Add or replace a group
    pub fn with_group(mut self, label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.groups.insert(label.into(), path.into());
        self
    }

    /// One loader per group, in label order
    pub fn loaders(&self) -> BTreeMap<String, IntervalLoader> {
        self.groups
            .iter()
            .map(|(label, path)| {
                (
                    label.clone(),
                    IntervalLoader::with_config(path, self.input.clone()),
                )
            })
            .collect()
    }
}
