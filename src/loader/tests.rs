use super::*;
use std::io::Cursor;

const SAMPLE_TABLE: &str = "trial,bursts
t1,2.0,4.0,6.0,10.0,12.0,13.0
t2,1.5,3.0,7.25,9.0,,
t3
";

fn load(table: &str, config: &LoaderConfig) -> Result<Vec<Trial>, LoaderError> {
    IntervalLoader::from_reader(Cursor::new(table), config)
}

#[test]
fn test_load_ragged_rows() {
    let trials = load(SAMPLE_TABLE, &LoaderConfig::default()).unwrap();

    assert_eq!(trials.len(), 3);
    assert_eq!(trials[0].id(), "t1");
    assert_eq!(trials[0].timestamps(), &[2.0, 4.0, 6.0, 10.0, 12.0, 13.0]);
    assert_eq!(trials[1].burst_count(), 2);
    assert_eq!(trials[2].burst_count(), 0);
}

#[test]
fn test_whitespace_separated_cells() {
    let table = "id,times\nA,1.0 2.0  3.0\t4.0\n";
    let trials = load(table, &LoaderConfig::default()).unwrap();

    assert_eq!(trials[0].timestamps(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(trials[0].starts().collect::<Vec<_>>(), vec![1.0, 3.0]);
    assert_eq!(trials[0].stops().collect::<Vec<_>>(), vec![2.0, 4.0]);
}

#[test]
fn test_multiple_header_rows() {
    let table = "recording WT\nid,times\nA,1,2\n";
    let config = LoaderConfig {
        header_rows: 2,
        ..Default::default()
    };

    let trials = load(table, &config).unwrap();
    assert_eq!(trials.len(), 1);
    assert_eq!(trials[0].timestamps(), &[1.0, 2.0]);
}

#[test]
fn test_tab_delimited() {
    let table = "id\ttimes\nA\t1\t2\t3\t4\n";
    let config = LoaderConfig {
        delimiter: b'\t',
        ..Default::default()
    };

    let trials = load(table, &config).unwrap();
    assert_eq!(trials[0].burst_count(), 2);
}

#[test]
fn test_non_numeric_token_rejected() {
    let table = "id,times\nA,1,2\nB,1,abc\n";
    let err = load(table, &LoaderConfig::default()).unwrap_err();

    match err {
        LoaderError::MalformedRow { line, trial, reason } => {
            assert_eq!(line, 3);
            assert_eq!(trial, "B");
            assert!(reason.contains("abc"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_utf8_names_trial() {
    let table: &[u8] = b"id,t\nA,1.0,\xff2.0\n";
    let err = IntervalLoader::from_reader(table, &LoaderConfig::default()).unwrap_err();

    match err {
        LoaderError::MalformedRow { line, trial, reason } => {
            assert_eq!(line, 2);
            assert_eq!(trial, "A");
            assert!(reason.contains("invalid UTF-8 in column 3"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // undecodable header rows are skipped like any other
    let trials = IntervalLoader::from_reader(&b"\xfe\xff\nA,1,2\n"[..], &LoaderConfig::default()).unwrap();
    assert_eq!(trials[0].timestamps(), &[1.0, 2.0]);
}

#[test]
fn test_unterminated_burst_rejected() {
    let table = "id,times\nA,1,2,3\n";
    let err = load(table, &LoaderConfig::default()).unwrap_err();

    assert!(matches!(err, LoaderError::MalformedRow { .. }));
    assert!(err.to_string().contains("unterminated burst"));
}

#[test]
fn test_missing_file() {
    let loader = IntervalLoader::new("/nonexistent/bursts.csv");
    assert!(matches!(loader.load(), Err(LoaderError::IoError(_))));
}

#[test]
fn test_trial_validation() {
    assert_eq!(
        Trial::new("x", vec![1.0, 2.0, 3.0]),
        Err(TrialError::OddLength(3))
    );
    assert_eq!(
        Trial::new("x", vec![1.0, f64::NAN]),
        Err(TrialError::NonFinite { index: 1 })
    );
    assert!(matches!(
        Trial::new("x", vec![1.0, 2.0, 2.0, 3.0]),
        Err(TrialError::NotIncreasing { index: 2, .. })
    ));
    assert!(Trial::new("x", vec![]).is_ok());
}

#[test]
fn test_in_memory_source() {
    let trials = vec![Trial::new("a", vec![0.0, 1.0]).unwrap()];
    let loaded = trials.load_trials().unwrap();

    assert_eq!(loaded, trials);
    assert_eq!(trials.describe(), "<in-memory>");
}

#[test]
fn test_config_from_toml() {
    let config: LoaderConfig = toml::from_str("header_rows = 3\ndelimiter = \"\\t\"").unwrap();
    assert_eq!(config.header_rows, 3);
    assert_eq!(config.delimiter, b'\t');
    assert_eq!(config.id_columns, 1);

    assert!(toml::from_str::<LoaderConfig>("delimiter = \";;\"").is_err());
}
