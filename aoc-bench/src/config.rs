//! Mapping from command-line arguments to validated run options

use crate::cli::Args;
use crate::error::CliError;
use aoc_harness::{Options, Registry};
use std::path::PathBuf;

/// Fully resolved run configuration.
pub struct Config {
    pub options: Options,
    pub minimal: bool,
    pub noisy: bool,
    pub input_dir: PathBuf,
}

impl Config {
    /// Resolve `args` against the registry and validate the result.
    ///
    /// The single-day flag carries the puzzle's day number; the options
    /// carry the registry position, so the harness stays ignorant of gaps
    /// in the implemented set.
    pub fn from_args(args: Args, registry: &Registry) -> Result<Self, CliError> {
        let single = args
            .day
            .map(|day| {
                registry
                    .iter()
                    .position(|solver| solver.day() == day)
                    .ok_or(CliError::DayNotImplemented(day))
            })
            .transpose()?;

        let options = Options {
            precision: args.precision,
            graph_width: args.graph_width,
            single,
            benchmark: args.benchmark,
            timing: !args.no_timing,
            part1: !args.no_part1,
            part2: !args.no_part2,
            answers: !args.no_answers,
            mask: args.mask,
            colorize: !args.no_color,
            graphs: args.graphs,
            visual: args.visual,
        };
        options.validate()?;

        Ok(Self {
            options,
            minimal: args.minimal,
            noisy: args.noisy,
            input_dir: args.input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::{ConfigError, DaySolver};
    use clap::Parser;

    struct DayFour;

    impl DaySolver for DayFour {
        const DAY: u8 = 4;
        type Parsed<'a> = ();
        type Part1 = u8;
        type Part2 = u8;

        fn parse(_: &str) {}

        fn part1(_: &()) -> u8 {
            0
        }

        fn part2(_: &(), part1: &u8) -> u8 {
            *part1
        }
    }

    struct DaySeven;

    impl DaySolver for DaySeven {
        const DAY: u8 = 7;
        type Parsed<'a> = ();
        type Part1 = u8;
        type Part2 = u8;

        fn parse(_: &str) {}

        fn part1(_: &()) -> u8 {
            0
        }

        fn part2(_: &(), part1: &u8) -> u8 {
            *part1
        }
    }

    fn registry() -> Registry {
        Registry::new(vec![&DayFour, &DaySeven]).unwrap()
    }

    fn config_from(argv: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(argv).unwrap(), &registry())
    }

    #[test]
    fn test_day_maps_to_registry_position() {
        let config = config_from(&["aoc-bench", "-d", "7"]).unwrap();
        assert_eq!(config.options.single, Some(1));
    }

    #[test]
    fn test_unimplemented_day_rejected() {
        let result = config_from(&["aoc-bench", "-d", "5"]);
        assert!(matches!(result, Err(CliError::DayNotImplemented(5))));
    }

    #[test]
    fn test_flag_polarity() {
        let config = config_from(&["aoc-bench", "-1", "-N", "-C"]).unwrap();
        assert!(config.options.part1);
        assert!(!config.options.part2);
        assert!(!config.options.answers);
        assert!(!config.options.colorize);
    }

    #[test]
    fn test_invalid_combination_rejected() {
        let result = config_from(&["aoc-bench", "-T", "-p", "3"]);
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::PrecisionWithoutTiming))
        ));
    }

    #[test]
    fn test_minimal_flags_pass_through() {
        let config = config_from(&["aoc-bench", "-m", "-Q"]).unwrap();
        assert!(config.minimal);
        assert!(config.noisy);
    }
}
