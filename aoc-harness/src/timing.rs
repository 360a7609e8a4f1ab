//! Per-phase timing model

use std::ops::{AddAssign, DivAssign};

/// Elapsed time of one task run, split by phase, in microseconds.
///
/// Samples support pairwise addition (summary accumulation) and scalar
/// division (benchmark-repetition averaging). The zero sample is the
/// contribution of a skipped task.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingSample {
    pub parsing: f64,
    pub part1: f64,
    pub part2: f64,
}

impl TimingSample {
    /// Sum of the three phases.
    pub fn total(&self) -> f64 {
        self.parsing + self.part1 + self.part2
    }
}

impl AddAssign for TimingSample {
    fn add_assign(&mut self, other: Self) {
        self.parsing += other.parsing;
        self.part1 += other.part1;
        self.part2 += other.part2;
    }
}

impl DivAssign<u32> for TimingSample {
    fn div_assign(&mut self, repetitions: u32) {
        let divisor = f64::from(repetitions);
        self.parsing /= divisor;
        self.part1 /= divisor;
        self.part2 /= divisor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accumulation() {
        let mut summary = TimingSample {
            parsing: 1.0,
            part1: 2.0,
            part2: 3.0,
        };
        summary += TimingSample {
            parsing: 4.0,
            part1: 0.5,
            part2: 0.5,
        };

        assert_eq!(
            summary,
            TimingSample {
                parsing: 5.0,
                part1: 2.5,
                part2: 3.5,
            }
        );
        assert_eq!(summary.total(), 11.0);
    }

    #[test]
    fn test_zero_sample_is_identity() {
        let mut summary = TimingSample {
            parsing: 1.5,
            part1: 2.5,
            part2: 3.5,
        };
        let before = summary;
        summary += TimingSample::default();
        assert_eq!(summary, before);
    }

    #[test]
    fn test_repetition_averaging() {
        let mut sample = TimingSample {
            parsing: 8.0,
            part1: 4.0,
            part2: 2.0,
        };
        sample /= 4;
        assert_eq!(
            sample,
            TimingSample {
                parsing: 2.0,
                part1: 1.0,
                part2: 0.5,
            }
        );
    }
}
