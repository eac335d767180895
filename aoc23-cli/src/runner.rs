//! Drives a solver end to end: read stdin, parse once, print every part.

use std::io;

use aoc23_solver::{Solver, SolverExt};

use crate::CliError;

/// Parse `input` once and solve parts `1..=PARTS`, returning the answers
/// in part order. Solving stops at the first failing part.
pub fn solve_all<S: Solver>(input: &str) -> Result<Vec<String>, CliError> {
    let mut shared = S::parse(input)?;
    (1..=S::PARTS)
        .map(|part| S::solve_part_checked_range(&mut shared, part).map_err(CliError::from))
        .collect()
}

/// Read all of standard input and print one `PartN: <answer>` line per
/// part.
pub fn run_stdin<S: Solver>() -> Result<(), CliError> {
    let input = io::read_to_string(io::stdin())?;
    for (part, answer) in (1u8..).zip(solve_all::<S>(&input)?) {
        println!("Part{}: {}", part, answer);
    }
    Ok(())
}
