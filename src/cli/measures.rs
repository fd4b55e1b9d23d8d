use anyhow::{Context, Result};
use std::path::PathBuf;

use burst_stats::loader::{IntervalLoader, LoaderConfig};
use burst_stats::measures::BurstMeasureCalculator;

fn format_values(values: &[f64]) -> String {
    let formatted: Vec<String> = values.iter().map(|v| format!("{:.4}", v)).collect();
    format!("[{}]", formatted.join(", "))
}

/// Print every trial's burst measures
pub fn run(input: PathBuf, header_rows: usize) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let config = LoaderConfig {
        header_rows,
        ..Default::default()
    };
    let trials = IntervalLoader::with_config(&input, config)
        .load()
        .with_context(|| format!("Failed to load burst table: {}", input.display()))?;

    let calculator = BurstMeasureCalculator::new();

    println!("Burst Measures");
    println!("==============");
    println!("File: {}", input.display());
    println!("Trials: {}", trials.len());
    println!();

    for trial in &trials {
        let measures = calculator.compute(trial);
        println!("Trial {} ({} bursts)", trial.id(), measures.burst_count);
        println!("  Burst durations:      {}", format_values(&measures.burst_duration));
        println!("  Cycle durations:      {}", format_values(&measures.cycle_duration));
        println!("  Burst frequencies:    {}", format_values(&measures.burst_frequency));
        println!("  Duty cycles:          {}", format_values(&measures.duty_cycle));
        println!("  Quiescence intervals: {}", format_values(&measures.quiescence_interval));
        println!();
    }

    Ok(())
}
