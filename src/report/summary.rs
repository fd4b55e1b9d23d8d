use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::{ComparisonReport, GroupDistributions, MeasureDistribution};
use crate::measures::MeasureKind;

/// Center of the bucket holding the largest average relative frequency
fn modal_bucket(distribution: &MeasureDistribution) -> Option<f64> {
    let hist = &distribution.rel_freq;
    let (index, value) = hist
        .avg_rel_freq
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))?;

    if *value <= 0.0 {
        return None;
    }
    Some((hist.edges[index] + hist.edges[index + 1]) / 2.0)
}

fn measure_line(kind: MeasureKind, distribution: &MeasureDistribution) -> String {
    let mode = modal_bucket(distribution)
        .map(|m| format!("{:.3}", m))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<20} {:>8} samples, {:>3} buckets, modal bucket {} {}",
        kind.title(),
        distribution.sample_count,
        distribution.rel_freq.bucket_count(),
        mode,
        kind.unit()
    )
}

fn group_header(label: &str, group: &GroupDistributions) -> String {
    format!(
        "{} ({} trials, {} degenerate)",
        label,
        group.trial_count,
        group.degenerate_trials.len()
    )
}

impl ComparisonReport {
    /// Format the summary with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Burst Comparison Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("=======================").cyan()));
            output.push_str(&format!(
                "{}: {}\n\n",
                style("Generated").bold(),
                self.generated_at.to_rfc3339()
            ));

            for (label, group) in &self.groups {
                let header = group_header(label, group);
                if group.degenerate_trials.is_empty() {
                    output.push_str(&format!("{}\n", style(header).bold().green()));
                } else {
                    output.push_str(&format!("{}\n", style(header).bold().yellow()));
                }

                for (kind, distribution) in &group.measures {
                    output.push_str(&format!("  {}\n", measure_line(*kind, distribution)));
                }
                output.push('\n');
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Burst Comparison Report")?;
        writeln!(f, "=======================")?;
        writeln!(f, "Generated: {}", self.generated_at.to_rfc3339())?;
        writeln!(f)?;

        for (label, group) in &self.groups {
            writeln!(f, "{}", group_header(label, group))?;
            for (kind, distribution) in &group.measures {
                writeln!(f, "  {}", measure_line(*kind, distribution))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
