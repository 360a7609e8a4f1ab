//! Property tests for the timing model's accumulation algebra.

use aoc_harness::TimingSample;
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = TimingSample> {
    (0.0..1e6, 0.0..1e6, 0.0..1e6).prop_map(|(parsing, part1, part2)| TimingSample {
        parsing,
        part1,
        part2,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Accumulating samples one at a time lands on the per-phase sums,
    /// exactly: both sides add the same floats in the same order.
    #[test]
    fn prop_summary_is_elementwise_sum(samples in prop::collection::vec(sample(), 0..20)) {
        let mut summary = TimingSample::default();
        for s in &samples {
            summary += *s;
        }

        let parsing: f64 = samples.iter().map(|s| s.parsing).sum();
        let part1: f64 = samples.iter().map(|s| s.part1).sum();
        let part2: f64 = samples.iter().map(|s| s.part2).sum();

        prop_assert_eq!(summary.parsing, parsing);
        prop_assert_eq!(summary.part1, part1);
        prop_assert_eq!(summary.part2, part2);
        prop_assert_eq!(summary.total(), parsing + part1 + part2);
    }

    /// The zero sample (a skipped task's contribution) never moves the
    /// summary.
    #[test]
    fn prop_zero_sample_is_identity(s in sample()) {
        let mut accumulated = s;
        accumulated += TimingSample::default();
        prop_assert_eq!(accumulated, s);
    }

    /// Benchmark averaging divides every phase by the repetition count.
    #[test]
    fn prop_division_averages_each_phase(s in sample(), repetitions in 1u32..10_000) {
        let mut averaged = s;
        averaged /= repetitions;

        let divisor = f64::from(repetitions);
        prop_assert_eq!(averaged.parsing, s.parsing / divisor);
        prop_assert_eq!(averaged.part1, s.part1 / divisor);
        prop_assert_eq!(averaged.part2, s.part2 / divisor);
    }
}
