//! Property-based tests for solver part-range validation

use aoc23_solver::{ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> Solver for TestSolver<N> {
    type SharedData<'a> = ();
    const PARTS: u8 = N;

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any part outside `1..=PARTS` is rejected with `PartOutOfRange`
    /// carrying the offending part number.
    #[test]
    fn out_of_range_parts_rejected(part in any::<u8>()) {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked_range(&mut shared, part);

        if part == 0 || part > 2 {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "expected Ok for part {}", part);
        }
    }

    /// Valid parts delegate straight to `solve_part`.
    #[test]
    fn valid_parts_delegate(part in 1u8..=3) {
        let mut shared = ();
        let mut shared2 = ();

        let checked = TestSolver::<3>::solve_part_checked_range(&mut shared, part);
        let direct = TestSolver::<3>::solve_part(&mut shared2, part);

        prop_assert_eq!(checked.unwrap(), direct.unwrap());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn part_zero_rejected() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked_range(&mut shared, 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn part_exceeding_max_rejected() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked_range(&mut shared, 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn valid_part_succeeds() {
        let mut shared = ();
        let result = TestSolver::<2>::solve_part_checked_range(&mut shared, 1);
        assert_eq!(result.unwrap(), "part1");
    }
}
