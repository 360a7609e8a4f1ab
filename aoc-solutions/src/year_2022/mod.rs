//! Solutions for the 2022 event.

pub mod day_01;
pub mod day_02;
pub mod day_03;
