//! Advent of Code 2022 solutions
//!
//! Each day module implements [`DaySolver`](aoc_harness::DaySolver) and
//! self-registers via [`register_day!`](aoc_harness::register_day). Linking
//! this crate is enough to make every solution visible to
//! [`Registry::from_plugins`](aoc_harness::Registry::from_plugins).

pub mod year_2022;
