//! Day 1: recover calibration values from amended document lines.
//!
//! Part 1 reads the first and last ASCII digit of each line; part 2 also
//! counts spelled-out digits (`one`..`nine`), including overlapping ones
//! like `eightwo`.

use anyhow::anyhow;
use aoc23_solver::{ParseError, SolveError, Solver};

pub struct Day1;

const SPELLED: [&[u8]; 9] = [
    b"one", b"two", b"three", b"four", b"five", b"six", b"seven", b"eight", b"nine",
];

impl Solver for Day1 {
    type SharedData<'a> = Vec<&'a str>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".to_string()));
        }
        Ok(lines)
    }

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let spelled = match part {
            1 => false,
            2 => true,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        calibration_sum(shared, spelled).map(|sum| sum.to_string())
    }
}

/// Sum of `first_digit * 10 + last_digit` over all lines.
fn calibration_sum(lines: &[&str], spelled: bool) -> Result<u64, SolveError> {
    lines
        .iter()
        .enumerate()
        .try_fold(0u64, |sum, (idx, line)| {
            let bytes = line.as_bytes();
            let mut digits = (0..bytes.len()).filter_map(|i| digit_at(bytes, i, spelled));
            let first = digits.next().ok_or_else(|| {
                SolveError::SolveFailed(
                    anyhow!("line {}: expected at least one digit", idx + 1).into(),
                )
            })?;
            let last = digits.last().unwrap_or(first);
            Ok(sum + first * 10 + last)
        })
}

/// Digit value starting at byte offset `i`, if any. Probing every offset
/// independently is what makes overlapping spelled digits work.
fn digit_at(bytes: &[u8], i: usize, spelled: bool) -> Option<u64> {
    if bytes[i].is_ascii_digit() {
        return Some(u64::from(bytes[i] - b'0'));
    }
    if spelled {
        SPELLED
            .iter()
            .position(|word| bytes[i..].starts_with(word))
            .map(|p| p as u64 + 1)
    } else {
        None
    }
}
