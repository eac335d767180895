//! Day 2: cube games against a fixed bag of 12 red, 13 green, 14 blue.

use aoc23_solver::{ParseError, SolveError, Solver};
use regex::Regex;

pub struct Day2;

const MAX_RED: u32 = 12;
const MAX_GREEN: u32 = 13;
const MAX_BLUE: u32 = 14;

/// Cube counts shown in a single draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

/// One `Game <id>: ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<CubeSet>,
}

impl Game {
    /// True iff every draw fits in the fixed bag.
    pub fn is_possible(&self) -> bool {
        self.draws
            .iter()
            .all(|d| d.red <= MAX_RED && d.green <= MAX_GREEN && d.blue <= MAX_BLUE)
    }

    /// Product of the per-color maxima across all draws: the power of the
    /// smallest bag that makes the game possible.
    pub fn power(&self) -> u32 {
        let min_bag = self.draws.iter().fold(CubeSet::default(), |acc, d| CubeSet {
            red: acc.red.max(d.red),
            green: acc.green.max(d.green),
            blue: acc.blue.max(d.blue),
        });
        min_bag.red * min_bag.green * min_bag.blue
    }
}

/// Line parser for `Game <id>: <draw>; <draw>; ...`. The compiled
/// patterns live in the parser value, not in global state; construct one
/// per parse.
struct GameParser {
    game_re: Regex,
    cube_re: Regex,
}

impl GameParser {
    fn new() -> Self {
        // both patterns are fixed, so compilation cannot fail
        Self {
            game_re: Regex::new(r"^Game (\d+): (.+)$").unwrap(),
            cube_re: Regex::new(r"(\d+) (\w+)").unwrap(),
        }
    }

    fn parse_line(&self, line: &str) -> Result<Game, ParseError> {
        let caps = self
            .game_re
            .captures(line)
            .ok_or_else(|| malformed(line))?;
        let id = caps[1].parse().map_err(|_| malformed(line))?;

        let mut draws = Vec::new();
        for draw_text in caps[2].split(';') {
            let mut draw = CubeSet::default();
            for cube in self.cube_re.captures_iter(draw_text) {
                let count: u32 = cube[1].parse().map_err(|_| malformed(line))?;
                match &cube[2] {
                    "red" => draw.red = count,
                    "green" => draw.green = count,
                    "blue" => draw.blue = count,
                    color => {
                        return Err(ParseError::MalformedInput(format!(
                            "unknown color {color:?} in line {line:?}"
                        )));
                    }
                }
            }
            draws.push(draw);
        }
        Ok(Game { id, draws })
    }
}

fn malformed(line: &str) -> ParseError {
    ParseError::MalformedInput(format!("expected `Game <id>: <draws>`, got {line:?}"))
}

impl Solver for Day2 {
    type SharedData<'a> = Vec<Game>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let parser = GameParser::new();
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| parser.parse_line(line))
            .collect()
    }

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .iter()
                .filter(|game| game.is_possible())
                .map(|game| game.id)
                .sum::<u32>()
                .to_string()),
            2 => Ok(shared.iter().map(Game::power).sum::<u32>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
