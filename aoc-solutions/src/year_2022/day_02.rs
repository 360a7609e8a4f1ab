//! Day 2: Rock Paper Scissors
//!
//! Each line pairs the opponent's shape (`A`-`C`) with a second column
//! (`X`-`Z`). Part 1 reads the second column as our shape, part 2 as the
//! required round outcome.

use aoc_harness::{register_day, DaySolver};

pub struct Day02;

/// A strategy-guide line as zero-based column indices.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub theirs: u64,
    pub ours: u64,
}

impl DaySolver for Day02 {
    const DAY: u8 = 2;
    type Parsed<'a> = Vec<Round>;
    type Part1 = u64;
    type Part2 = u64;

    fn parse(input: &str) -> Vec<Round> {
        input
            .lines()
            .filter_map(|line| {
                let mut bytes = line.bytes();
                let theirs = bytes.next()?.checked_sub(b'A')?;
                let ours = bytes.nth(1)?.checked_sub(b'X')?;
                (theirs < 3 && ours < 3).then_some(Round {
                    theirs: u64::from(theirs),
                    ours: u64::from(ours),
                })
            })
            .collect()
    }

    /// Second column is our shape; score shape + outcome.
    fn part1(rounds: &Vec<Round>) -> u64 {
        rounds
            .iter()
            .map(|round| {
                let outcome = (round.ours + 4 - round.theirs) % 3;
                (round.ours + 1) + outcome * 3
            })
            .sum()
    }

    /// Second column is the outcome; derive the shape that produces it.
    fn part2(rounds: &Vec<Round>, _part1: &u64) -> u64 {
        rounds
            .iter()
            .map(|round| {
                let shape = (round.theirs + round.ours + 2) % 3;
                (shape + 1) + round.ours * 3
            })
            .sum()
    }
}

register_day!(Day02);
