use montepi::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::f64::consts::PI;

#[test]
fn reference_sweep_converges_to_pi() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0x00C0_FFEE);
    let config = SweepConfig::new(100_000, 1_100_000, 100_000).unwrap();

    let result = sweep(&config, &mut rng).unwrap();

    assert_eq!(result.len(), 10);
    let (n, est) = result.last().unwrap();
    assert_eq!(n, 1_000_000);
    assert!((est - PI).abs() < 0.05, "estimate {est} too far from π");
}

#[test]
fn unseeded_sweeps_converge_to_pi() {
    // different each run; the standard error at 10⁶ points is ~0.0016
    let mut rng = rand::thread_rng();
    let config = SweepConfig::default();

    for _ in 0..3 {
        let result = sweep(&config, &mut rng).unwrap();
        let (_, est) = result.last().unwrap();
        assert!((est - PI).abs() < 0.05);
        assert!(result.rms_error().unwrap() < 0.05);
    }
}

#[test]
fn small_sweep_sizes_and_bounds() {
    let mut rng = rand::thread_rng();
    let config = SweepConfig::new(100, 1_100, 100).unwrap();

    let result = sweep(&config, &mut rng).unwrap();

    let expected: Vec<usize> = (1..=10).map(|i| 100 * i).collect();
    assert_eq!(result.sizes(), expected.as_slice());
    assert_eq!(result.estimates().len(), 10);
    assert!(result
        .estimates()
        .iter()
        .all(|est| (0.0..=4.0).contains(est)));
}

#[test]
fn invalid_configs_are_rejected() {
    assert_eq!(SweepConfig::new(0, 100, 10), Err(SweepError::ZeroFrom));
    assert_eq!(SweepConfig::new(10, 100, 0), Err(SweepError::ZeroStep));
    assert_eq!(
        SweepConfig::new(100, 100, 10),
        Err(SweepError::EmptyRange { from: 100, to: 100 })
    );
}

#[test]
fn empty_point_set_has_no_estimate() {
    let mut rng = rand::thread_rng();
    let points = generate(0, &mut rng);
    assert_eq!(estimate(&points), Err(EstimateError::EmptyPointSet));
}

#[cfg(feature = "serde1")]
#[test]
fn sweep_result_serializes_pairs_by_index() {
    let result = SweepResult::from_pairs(vec![(100, 3.0), (200, 3.5)]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["sizes"], serde_json::json!([100, 200]));
    assert_eq!(json["estimates"], serde_json::json!([3.0, 3.5]));
}
