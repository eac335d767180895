//! Helpers shared across solutions.

pub mod math;
