//! Day 8 binary: node network path lengths from stdin.

use aoc23_cli::runner;
use aoc23_solutions::year_2023::day_8::Day8;

fn main() {
    if let Err(e) = runner::run_stdin::<Day8>() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
