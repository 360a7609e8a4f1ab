//! Day 3: Rucksack Reorganization
//!
//! Each line is one rucksack; its two halves are compartments. Part 1
//! sums the priority of the item common to both halves, part 2 the
//! priority of the badge common to each group of three rucksacks.

use aoc_harness::{register_day, DaySolver};
use itertools::Itertools;

pub struct Day03;

impl DaySolver for Day03 {
    const DAY: u8 = 3;
    // Lines borrow from the input buffer; nothing here needs a copy.
    type Parsed<'a> = Vec<&'a str>;
    type Part1 = u64;
    type Part2 = u64;

    fn parse(input: &str) -> Vec<&str> {
        input.lines().filter(|line| !line.is_empty()).collect()
    }

    fn part1(rucksacks: &Vec<&str>) -> u64 {
        rucksacks
            .iter()
            .map(|rucksack| {
                let (front, back) = rucksack.split_at(rucksack.len() / 2);
                let shared = item_set(front) & item_set(back);
                priority_sum(shared)
            })
            .sum()
    }

    fn part2(rucksacks: &Vec<&str>, _part1: &u64) -> u64 {
        rucksacks
            .iter()
            .tuples()
            .map(|(first, second, third)| {
                let badge = item_set(first) & item_set(second) & item_set(third);
                priority_sum(badge)
            })
            .sum()
    }
}

register_day!(Day03);

/// Item occurrence set: bit `p` is set when an item of priority `p` is
/// present (priorities are 1-52, so a u64 covers them).
fn item_set(items: &str) -> u64 {
    items.bytes().fold(0, |set, item| set | 1 << priority(item))
}

fn priority(item: u8) -> u64 {
    match item {
        b'a'..=b'z' => u64::from(item - b'a') + 1,
        b'A'..=b'Z' => u64::from(item - b'A') + 27,
        _ => 0,
    }
}

fn priority_sum(mut set: u64) -> u64 {
    let mut sum = 0;
    while set != 0 {
        sum += u64::from(set.trailing_zeros());
        set &= set - 1;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn test_part1_example() {
        let parsed = Day03::parse(EXAMPLE);
        assert_eq!(Day03::part1(&parsed), 157);
    }

    #[test]
    fn test_part2_example() {
        let parsed = Day03::parse(EXAMPLE);
        let part1 = Day03::part1(&parsed);
        assert_eq!(Day03::part2(&parsed, &part1), 70);
    }

    #[test]
    fn test_priorities() {
        assert_eq!(priority(b'a'), 1);
        assert_eq!(priority(b'z'), 26);
        assert_eq!(priority(b'A'), 27);
        assert_eq!(priority(b'Z'), 52);
    }

    #[test]
    fn test_single_rucksack() {
        // 'p' appears in both halves; priority 16.
        assert_eq!(Day03::part1(&vec!["vJrwpWtwJgWrhcsFMMfFFhFp"]), 16);
    }
}
