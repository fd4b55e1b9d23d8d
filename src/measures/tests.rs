use super::*;
use proptest::prelude::*;
use std::str::FromStr;

fn trial(timestamps: &[f64]) -> Trial {
    Trial::new("test", timestamps.to_vec()).unwrap()
}

#[test]
fn test_three_burst_trial() {
    let measures = BurstMeasureCalculator::new().compute(&trial(&[2.0, 4.0, 6.0, 10.0, 12.0, 13.0]));

    assert_eq!(measures.burst_count, 3);
    assert_eq!(measures.burst_duration, vec![2.0, 4.0, 1.0]);
    assert_eq!(measures.cycle_duration, vec![4.0, 6.0]);
    assert_eq!(measures.burst_frequency, vec![0.25]);
    assert_eq!(measures.duty_cycle, vec![0.5, 4.0 / 6.0]);
    assert_eq!(measures.quiescence_interval, vec![2.0, 2.0]);
    assert!(!measures.is_degenerate());
}

#[test]
fn test_single_burst_is_degenerate() {
    let measures = BurstMeasureCalculator::new().compute(&trial(&[1.0, 3.5]));

    assert_eq!(measures.burst_duration, vec![2.5]);
    assert!(measures.cycle_duration.is_empty());
    assert!(measures.burst_frequency.is_empty());
    assert!(measures.duty_cycle.is_empty());
    assert!(measures.quiescence_interval.is_empty());
    assert!(measures.is_degenerate());
}

#[test]
fn test_empty_trial() {
    let measures = BurstMeasureCalculator::new().compute(&trial(&[]));

    assert_eq!(measures, MeasureSet::default());
    assert!(measures.is_degenerate());
}

#[test]
fn test_two_bursts_have_no_frequency() {
    let measures = BurstMeasureCalculator::new().compute(&trial(&[0.0, 1.0, 4.0, 5.0]));

    assert_eq!(measures.cycle_duration, vec![4.0]);
    assert!(measures.burst_frequency.is_empty());
    assert_eq!(measures.duty_cycle, vec![0.25]);
}

#[test]
fn test_samples_by_kind() {
    let measures = BurstMeasureCalculator::new().compute(&trial(&[2.0, 4.0, 6.0, 10.0, 12.0, 13.0]));

    assert_eq!(measures.samples(MeasureKind::BurstDuration).len(), 3);
    assert_eq!(measures.samples(MeasureKind::CycleDuration), &[4.0, 6.0]);
    assert_eq!(measures.samples(MeasureKind::QuiescenceInterval), &[2.0, 2.0]);
}

#[test]
fn test_measure_kind_names_sorted() {
    let mut names: Vec<_> = MeasureKind::ALL.iter().map(|k| k.name()).collect();
    let declared = names.clone();
    names.sort();
    assert_eq!(names, declared);

    assert_eq!(MeasureKind::from_str("qi").unwrap(), MeasureKind::QuiescenceInterval);
    assert!(MeasureKind::from_str("burstFreq").is_err());
    assert_eq!(serde_json::to_string(&MeasureKind::DutyCycle).unwrap(), "\"dutyCycle\"");
}

fn arb_trial() -> impl Strategy<Value = Trial> {
    prop::collection::vec(0.001f64..10.0, 0..40).prop_map(|gaps| {
        let mut t = 0.0;
        let mut timestamps = Vec::with_capacity(gaps.len() & !1);
        for gap in gaps.iter().take(gaps.len() & !1) {
            t += gap;
            timestamps.push(t);
        }
        Trial::new("prop", timestamps).unwrap()
    })
}

proptest! {
    #[test]
    fn test_measure_lengths_and_signs(trial in arb_trial()) {
        let measures = BurstMeasureCalculator::new().compute(&trial);
        let bursts = trial.burst_count();

        prop_assert_eq!(measures.burst_duration.len(), bursts);
        prop_assert_eq!(measures.cycle_duration.len(), bursts.saturating_sub(1));
        prop_assert_eq!(measures.duty_cycle.len(), bursts.saturating_sub(1));
        prop_assert_eq!(measures.quiescence_interval.len(), bursts.saturating_sub(1));
        prop_assert_eq!(measures.burst_frequency.len(), bursts.saturating_sub(2));

        for kind in MeasureKind::ALL {
            prop_assert!(measures.samples(kind).iter().all(|v| *v >= 0.0));
        }
        prop_assert!(measures.duty_cycle.iter().all(|d| *d <= 1.0));
    }
}
