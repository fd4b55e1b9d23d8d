//! Writers handing computed distributions to plotting and reporting tools.
//!
//! - [`write_json`]: the whole [`ComparisonReport`] as one JSON document
//! - [`write_csv`]: two CSV files per group and measure
//!
//! CSV layout (`<group>_<measure>_relfreq.csv`):
//!
//! ```text
//! bucket_left,bucket_right,avg_rel_freq,<trial id>,<trial id>,...
//! ```
//!
//! and (`<group>_<measure>_cdf.csv`):
//!
//! ```text
//! edge,mean_cdf,<trial id>,<trial id>,...
//! ```

use log::info;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{ComparisonReport, GroupDistributions, MeasureDistribution, ReportError};

/// Write the report as pretty-printed JSON
pub fn write_json(report: &ComparisonReport, path: &Path) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!("Wrote {}", path.display());
    Ok(())
}

/// Write per-group, per-measure CSV tables into `dir`, returning the files written.
///
/// Fails before writing anything if two labels share a file name stem.
pub fn write_csv(report: &ComparisonReport, dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let stems = file_stems(report)?;
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    for (label, group) in &report.groups {
        let stem = &stems[label.as_str()];
        for (kind, distribution) in &group.measures {
            let rel_path = dir.join(format!("{}_{}_relfreq.csv", stem, kind.name()));
            write_rel_freq(&rel_path, group, distribution)?;
            written.push(rel_path);

            let cdf_path = dir.join(format!("{}_{}_cdf.csv", stem, kind.name()));
            write_cdf(&cdf_path, group, distribution)?;
            written.push(cdf_path);
        }
    }

    info!("Wrote {} CSV files to {}", written.len(), dir.display());
    Ok(written)
}

fn write_rel_freq(
    path: &Path,
    group: &GroupDistributions,
    distribution: &MeasureDistribution,
) -> Result<(), ReportError> {
    let hist = &distribution.rel_freq;
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![
        "bucket_left".to_string(),
        "bucket_right".to_string(),
        "avg_rel_freq".to_string(),
    ];
    header.extend(group.trial_ids.iter().cloned());
    writer.write_record(&header)?;

    for (bucket, avg) in hist.avg_rel_freq.iter().enumerate() {
        let mut record = vec![
            hist.edges[bucket].to_string(),
            hist.edges[bucket + 1].to_string(),
            avg.to_string(),
        ];
        record.extend(hist.rel_freqs.iter().map(|row| row[bucket].to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_cdf(
    path: &Path,
    group: &GroupDistributions,
    distribution: &MeasureDistribution,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["edge".to_string(), "mean_cdf".to_string()];
    header.extend(group.trial_ids.iter().cloned());
    writer.write_record(&header)?;

    for (index, edge) in distribution.edges.iter().enumerate() {
        let mut record = vec![edge.to_string(), distribution.mean_cdf[index].to_string()];
        record.extend(distribution.cdfs.rows.iter().map(|row| row[index].to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn file_stems(report: &ComparisonReport) -> Result<BTreeMap<&str, String>, ReportError> {
    let mut owners: BTreeMap<String, &str> = BTreeMap::new();
    let mut stems = BTreeMap::new();

    for label in report.groups.keys() {
        let stem = sanitize(label);
        if let Some(first) = owners.get(&stem) {
            return Err(ReportError::OutputNameCollision {
                first: first.to_string(),
                second: label.clone(),
                stem,
            });
        }
        owners.insert(stem.clone(), label);
        stems.insert(label.as_str(), stem);
    }

    Ok(stems)
}

/// Group labels become file name stems
fn sanitize(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
