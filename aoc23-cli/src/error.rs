//! Error type shared by the puzzle binaries

use thiserror::Error;

/// Anything that can abort a puzzle run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading standard input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input text did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] aoc23_solver::ParseError),

    /// A part failed to solve
    #[error("Solve error: {0}")]
    Solve(#[from] aoc23_solver::SolveError),
}
