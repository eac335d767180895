//! Core solver trait and related types

use crate::error::{ParseError, SolveError};

/// Core trait implemented by each puzzle.
///
/// A solver owns two concerns: turning the raw input text into a shared
/// data structure, and answering numbered parts against that data. The
/// shared data is parsed exactly once and handed mutably to each part, so
/// a solver may cache intermediate results in it.
///
/// # Example
///
/// ```
/// use aoc23_solver::{ParseError, SolveError, Solver};
///
/// struct SumAndProduct;
///
/// impl Solver for SumAndProduct {
///     type SharedData<'a> = Vec<i64>;
///     const PARTS: u8 = 2;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.trim().parse().map_err(|_| {
///                     ParseError::MalformedInput(format!("expected integer, got {line:?}"))
///                 })
///             })
///             .collect()
///     }
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut data = SumAndProduct::parse("2\n3\n4").unwrap();
/// assert_eq!(SumAndProduct::solve_part(&mut data, 1).unwrap(), "9");
/// assert_eq!(SumAndProduct::solve_part(&mut data, 2).unwrap(), "24");
/// ```
pub trait Solver {
    /// The shared data structure holding parsed input and intermediate
    /// results.
    ///
    /// Any ownership strategy works:
    /// - owned structures (`Vec<T>`, custom structs) when parsing
    ///   transforms the text
    /// - borrowed data (`Vec<&'a str>`) for zero-copy parsing
    type SharedData<'a>;

    /// Number of parts this solver implements.
    const PARTS: u8;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;

    /// Solve one part of the puzzle against the parsed data.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Extension methods for every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects part numbers outside
    /// `1..=PARTS` with [`SolveError::PartOutOfRange`] before touching the
    /// solver.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
