use super::*;
use crate::bins::{BinConfig, BinRange, ConfigurationError};
use crate::loader::LoaderError;

fn trial(id: &str, timestamps: &[f64]) -> Trial {
    Trial::new(id, timestamps.to_vec()).unwrap()
}

fn sample_groups() -> BTreeMap<String, Vec<Trial>> {
    let mut groups = BTreeMap::new();
    groups.insert(
        "WT".to_string(),
        vec![
            trial("wt1", &[2.0, 4.0, 6.0, 10.0, 12.0, 13.0]),
            trial("wt2", &[0.0, 1.5, 5.0, 7.0, 11.0, 12.5, 20.0, 21.0]),
        ],
    );
    groups.insert(
        "EKI".to_string(),
        vec![trial("eki1", &[1.0, 2.0]), trial("eki2", &[0.0, 3.0, 4.0, 9.0])],
    );
    groups
}

#[test]
fn test_groups_and_measures_sorted() {
    let report = GroupComparisonReport::new(BinSpec::standard())
        .run(&sample_groups())
        .unwrap();

    let labels: Vec<_> = report.groups.keys().cloned().collect();
    assert_eq!(labels, vec!["EKI", "WT"]);

    let measures: Vec<_> = report.groups["WT"].measures.keys().map(|k| k.name()).collect();
    assert_eq!(measures, vec!["burstDur", "cycleDur", "dutyCycle", "qI"]);
}

#[test]
fn test_group_distribution_contents() {
    let report = GroupComparisonReport::new(BinSpec::standard())
        .run(&sample_groups())
        .unwrap();
    let wt = report.group("WT").unwrap();

    assert_eq!(wt.trial_count, 2);
    assert_eq!(wt.trial_ids, vec!["wt1", "wt2"]);
    assert!(wt.degenerate_trials.is_empty());

    let burst = &wt.measures[&MeasureKind::BurstDuration];
    assert_eq!(burst.sample_count, 7);
    assert_eq!(burst.cdfs.rows.len(), 2);
    assert_eq!(burst.rel_freq.rel_freqs.len(), 2);
    assert_eq!(burst.edges.len(), 49);
    assert_eq!(burst.rel_freq.bucket_count(), 48);
    assert_eq!(burst.mean_cdf, burst.cdfs.mean());

    // wt1 burst durations [2, 4, 1] all fall inside [1, 49]
    let row_sum: f64 = burst.rel_freq.rel_freqs[0].iter().sum();
    assert!((row_sum - 1.0).abs() < 1e-12);
}

#[test]
fn test_degenerate_trial_contributes_zero_row() {
    let report = GroupComparisonReport::new(BinSpec::standard())
        .run(&sample_groups())
        .unwrap();
    let eki = report.group("EKI").unwrap();

    assert_eq!(eki.degenerate_trials, vec![0]);

    let cycle = &eki.measures[&MeasureKind::CycleDuration];
    assert!(cycle.rel_freq.rel_freqs[0].iter().all(|v| *v == 0.0));
    assert!(cycle.cdfs.rows[0].iter().all(|v| *v == 0.0));

    // eki2 has one cycle of 4 s, in bucket [4, 5); the mean halves it
    let bucket = cycle.edges.iter().position(|e| *e == 4.0).unwrap();
    assert_eq!(cycle.rel_freq.rel_freqs[1][bucket], 1.0);
    assert_eq!(cycle.rel_freq.avg_rel_freq[bucket], 0.5);
}

#[test]
fn test_pair_aligns_groups() {
    let report = GroupComparisonReport::new(BinSpec::standard())
        .run(&sample_groups())
        .unwrap();

    let pair = report.pair("WT", "EKI", MeasureKind::DutyCycle).unwrap();
    assert_eq!(pair.bucket_lefts.len(), 24);
    assert_eq!(pair.bucket_widths.len(), 24);
    assert_eq!(pair.first.label, "WT");
    assert_eq!(pair.second.label, "EKI");
    assert_eq!(pair.second.avg_rel_freq.len(), 24);

    let json = serde_json::to_value(&pair).unwrap();
    assert_eq!(json["first"]["label"], "WT");
    assert_eq!(json["second"]["avg_rel_freq"].as_array().unwrap().len(), 24);

    assert!(matches!(
        report.pair("WT", "KO", MeasureKind::DutyCycle),
        Err(ReportError::UnknownGroup(label)) if label == "KO"
    ));
}

#[test]
fn test_pair_reports_missing_measure() {
    let mut report = GroupComparisonReport::new(BinSpec::standard())
        .run(&sample_groups())
        .unwrap();
    if let Some(eki) = report.groups.get_mut("EKI") {
        eki.measures.remove(&MeasureKind::QuiescenceInterval);
    }

    assert!(report.pair("WT", "EKI", MeasureKind::DutyCycle).is_ok());
    assert!(matches!(
        report.pair("WT", "EKI", MeasureKind::QuiescenceInterval),
        Err(ReportError::MissingMeasure { group, measure: MeasureKind::QuiescenceInterval }) if group == "EKI"
    ));
}

#[test]
fn test_duplicate_group_label_rejected() {
    let groups = [
        Group::new("WT", vec![trial("a", &[0.0, 1.0, 2.0, 3.0])]),
        Group::new("WT", vec![trial("b", &[0.0, 2.0, 4.0, 5.0])]),
    ];

    let result = GroupComparisonReport::new(BinSpec::standard()).run_groups(&groups);
    assert!(matches!(result, Err(ReportError::DuplicateGroup(label)) if label == "WT"));
}

#[test]
fn test_csv_export_rejects_colliding_labels() {
    let mut groups = BTreeMap::new();
    groups.insert("W T".to_string(), vec![trial("a", &[0.0, 1.0, 2.0, 3.0])]);
    groups.insert("W_T".to_string(), vec![trial("b", &[0.0, 2.0, 4.0, 5.0])]);
    let report = GroupComparisonReport::new(BinSpec::standard())
        .run(&groups)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let err = export::write_csv(&report, dir.path()).unwrap_err();
    match err {
        ReportError::OutputNameCollision { first, second, stem } => {
            assert_eq!(first, "W T");
            assert_eq!(second, "W_T");
            assert_eq!(stem, "W_T");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_no_groups_rejected() {
    let report = GroupComparisonReport::new(BinSpec::standard());
    assert!(matches!(report.run(&BTreeMap::new()), Err(ReportError::NoGroups)));
}

#[test]
fn test_invalid_bins_rejected_before_loading() {
    let mut config = ComparisonConfig::default().with_group("WT", "/nonexistent/wt.csv");
    config.bins.duty_cycle = BinRange::new(0.0, 1.0, 0.0);

    let err = GroupComparisonReport::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        ReportError::Configuration(ConfigurationError::NonPositiveStep { .. })
    ));
}

#[test]
fn test_load_failure_names_group() {
    let config = ComparisonConfig::default().with_group("WT", "/nonexistent/wt.csv");
    let err = GroupComparisonReport::from_config(&config)
        .unwrap()
        .run_config(&config)
        .unwrap_err();

    match err {
        ReportError::Load { group, source } => {
            assert_eq!(group, "WT");
            assert!(matches!(source, LoaderError::IoError(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_config_from_str() {
    let config = ComparisonConfig::from_str(
        r#"
            [input]
            header_rows = 2

            [groups]
            WT = "wt.csv"
            EKI = "eki.csv"

            [bins.qI]
            min = 0.0
            max = 30.0
            step = 0.5
        "#,
    )
    .unwrap();

    assert_eq!(config.input.header_rows, 2);
    assert_eq!(config.groups.len(), 2);
    assert_eq!(config.bins.quiescence_interval, BinRange::new(0.0, 30.0, 0.5));
    assert_eq!(config.bins.duty_cycle, BinConfig::default().duty_cycle);

    let bins = BinSpec::new(&config.bins).unwrap();
    assert_eq!(bins.edges(MeasureKind::QuiescenceInterval).len(), 60);
}

#[test]
fn test_config_rejects_unknown_section() {
    assert!(matches!(
        ComparisonConfig::from_str("[plot]\ncolor = \"red\""),
        Err(ReportError::TomlError(_))
    ));
}

#[test]
fn test_display_summary() {
    let report = GroupComparisonReport::new(BinSpec::standard())
        .run(&sample_groups())
        .unwrap();

    let output = format!("{}", report);
    assert!(output.contains("Burst Comparison Report"));
    assert!(output.contains("EKI (2 trials, 1 degenerate)"));
    assert!(output.contains("WT (2 trials, 0 degenerate)"));
    assert!(output.contains("Quiescence interval"));
}
