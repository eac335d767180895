//! Advent of Code 2023 puzzle solutions
//!
//! Each day lives in its own module under [`year_2023`] and implements
//! [`aoc23_solver::Solver`]: parse the whole input once, then answer the
//! numbered parts. The days are entirely independent of each other; the
//! only shared code is the small [`utils`] module.

pub mod utils;
pub mod year_2023;
