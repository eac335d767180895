//! Thin stdin/stdout runners for the puzzle binaries.
//!
//! Each binary under `src/bin/` wires one solver into
//! [`runner::run_stdin`]: the whole of standard input is read up front,
//! parsed once, and every part's answer is printed as a `PartN: <answer>`
//! line. Any error aborts the run.

mod error;
pub mod runner;

pub use error::CliError;
