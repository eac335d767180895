//! Day 1 binary: calibration values from stdin.

use aoc23_cli::runner;
use aoc23_solutions::year_2023::day_1::Day1;

fn main() {
    if let Err(e) = runner::run_stdin::<Day1>() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
