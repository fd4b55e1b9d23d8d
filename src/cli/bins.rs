use anyhow::{Context, Result};
use std::path::PathBuf;

use burst_stats::bins::BinSpec;

use super::config;

/// Print the bin edges of every measure
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(config.as_deref(), Vec::new(), None)?;
    let bins = BinSpec::new(&config.bins).context("Invalid bin configuration")?;

    for (kind, edges) in bins.iter() {
        if let Some(range) = bins.range(kind) {
            println!(
                "{} ({}): min {}, max {}, step {} -> {} edges",
                kind.title(),
                kind.name(),
                range.min,
                range.max,
                range.step,
                edges.len()
            );
        }
        let formatted: Vec<String> = edges.iter().map(|e| format!("{:.4}", e)).collect();
        println!("  {}", formatted.join(" "));
    }

    Ok(())
}
