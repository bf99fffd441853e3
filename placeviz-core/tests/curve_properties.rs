//! Property tests for the distribution curves.

use placeviz_core::stats::{CumulativeHistogram, EmpiricalCdf};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cdf_preserves_length_and_is_monotone(
        observations in prop::collection::vec(0.0f64..1000.0, 1..200)
    ) {
        let cdf = EmpiricalCdf::from_observations(&observations).unwrap();
        prop_assert_eq!(cdf.len(), observations.len());

        let points = cdf.points();
        for pair in points.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
            prop_assert!(pair[0].1 <= pair[1].1);
        }
        for &(_, y) in &points {
            prop_assert!((0.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn cdf_ignores_input_order(
        observations in prop::collection::vec(0.0f64..100.0, 1..100)
    ) {
        let mut reversed = observations.clone();
        reversed.reverse();

        prop_assert_eq!(
            EmpiricalCdf::from_observations(&observations).unwrap(),
            EmpiricalCdf::from_observations(&reversed).unwrap()
        );
    }

    #[test]
    fn cdf_zero_run_is_flat(
        zeros in 1usize..20,
        tail in prop::collection::vec(0.001f64..100.0, 1..50)
    ) {
        let mut observations = vec![0.0; zeros];
        observations.extend_from_slice(&tail);

        let cdf = EmpiricalCdf::from_observations(&observations).unwrap();
        let steps = cdf.steps();

        prop_assert_eq!(cdf.zero_run(), zeros);
        let level = steps[zeros];
        for &step in &steps[..zeros] {
            prop_assert_eq!(step, level);
        }
    }

    #[test]
    fn histogram_cumulative_is_monotone_and_bounded(
        observations in prop::collection::vec(0.0f64..20.0, 1..200),
        bins in 1usize..30
    ) {
        let hist = CumulativeHistogram::from_observations(&observations, 10.0, bins).unwrap();

        prop_assert_eq!(hist.edges().len(), bins + 1);
        prop_assert_eq!(hist.cumulative().len(), bins + 1);
        for pair in hist.cumulative().windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for &y in hist.cumulative() {
            prop_assert!((0.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn histogram_within_range_sample_reaches_one(
        observations in prop::collection::vec(0.0f64..=10.0, 1..100)
    ) {
        let hist = CumulativeHistogram::from_observations(&observations, 10.0, 10).unwrap();
        let last = *hist.cumulative().last().unwrap();
        prop_assert!((last - 1.0).abs() < 1e-9);
    }
}
