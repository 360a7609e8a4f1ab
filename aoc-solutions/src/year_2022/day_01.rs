//! Day 1: Calorie Counting
//!
//! Input is blank-line-separated blocks of calorie counts, one elf per
//! block. Part 1 asks for the largest per-elf total, part 2 for the sum
//! of the top three.

use aoc_harness::{register_day, DaySolver};
use itertools::Itertools;

pub struct Day01;

impl DaySolver for Day01 {
    const DAY: u8 = 1;
    type Parsed<'a> = Vec<u64>;
    type Part1 = u64;
    type Part2 = u64;

    /// One total per elf, sorted descending so both parts are prefix
    /// reads.
    fn parse(input: &str) -> Vec<u64> {
        input
            .split("\n\n")
            .map(|block| {
                block
                    .lines()
                    .filter_map(|line| line.parse::<u64>().ok())
                    .sum()
            })
            .sorted_unstable_by(|a: &u64, b: &u64| b.cmp(a))
            .collect()
    }

    fn part1(totals: &Vec<u64>) -> u64 {
        totals.first().copied().unwrap_or(0)
    }

    fn part2(totals: &Vec<u64>, _part1: &u64) -> u64 {
        totals.iter().take(3).sum()
    }
}

register_day!(Day01);
