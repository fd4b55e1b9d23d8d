use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use burst_stats::report::{export, GroupComparisonReport};

use super::config::{self, GroupArg};
use super::OutputFormat;

/// Compare every configured group and optionally write the distributions
pub fn run(
    config: Option<PathBuf>,
    groups: Vec<GroupArg>,
    header_rows: Option<usize>,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let config = config::resolve(config.as_deref(), groups, header_rows)?;
    if config.groups.is_empty() {
        anyhow::bail!("No groups given; use --config or --group NAME=PATH");
    }

    for (label, path) in &config.groups {
        if !path.exists() {
            anyhow::bail!("Burst table for group '{}' does not exist: {}", label, path.display());
        }
    }

    let comparison = GroupComparisonReport::from_config(&config).context("Invalid bin configuration")?;
    let report = comparison.run_config(&config)?;

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    if let Some(dir) = output {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

        if matches!(format, OutputFormat::Json | OutputFormat::Both) {
            let path = dir.join("comparison.json");
            export::write_json(&report, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }

        if matches!(format, OutputFormat::Csv | OutputFormat::Both) {
            let files = export::write_csv(&report, &dir)
                .with_context(|| format!("Failed to write CSV tables to {}", dir.display()))?;
            println!("Wrote {} CSV tables to {}", files.len(), dir.display());
        }
    }

    info!("Compared {} groups", report.groups.len());
    Ok(())
}
