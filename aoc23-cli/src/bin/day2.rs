//! Day 2 binary: cube game constraints from stdin.

use aoc23_cli::runner;
use aoc23_solutions::year_2023::day_2::Day2;

fn main() {
    if let Err(e) = runner::run_stdin::<Day2>() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
