//! Shared parse-then-solve seam for the 2023 puzzle programs.
//!
//! Every puzzle follows the same rhythm: consume the whole input text,
//! parse it once into a problem-specific structure, then answer one or
//! more numbered parts against that structure. The [`Solver`] trait
//! captures exactly that rhythm so the binaries can share a single
//! stdin-to-stdout runner, and nothing more — there is no registry, no
//! caching, no scheduling.
//!
//! Parsing failures are [`ParseError`]s carrying enough context to name
//! the offending line; solving failures are [`SolveError`]s, with
//! puzzle-specific error types boxed into
//! [`SolveError::SolveFailed`].

mod error;
mod solver;

pub use error::{ParseError, SolveError};
pub use solver::{Solver, SolverExt};
