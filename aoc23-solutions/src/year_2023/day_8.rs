//! Day 8: follow a cyclic left/right instruction sequence through a node
//! network.
//!
//! Part 1 walks from `AAA` until `ZZZ`. Part 2 starts a ghost on every
//! `..A` node and asks when all of them stand on `..Z` nodes at once.
//! The ghosts are never simulated in lock-step: each ghost's walk is
//! periodic, and the puzzle inputs are built so a ghost first reaches a
//! terminal node exactly at its period, which makes the combined meeting
//! point the least common multiple of the individual path lengths.
//! Lock-step simulation would need billions of steps on real inputs, so
//! the LCM assumption is load-bearing and deliberate.

use std::collections::{HashMap, HashSet};
use std::fmt;

use aoc23_solver::{ParseError, SolveError, Solver};
use itertools::Itertools;
use regex::Regex;
use thiserror::Error;

use crate::utils::math::lcm;

pub struct Day8;

const START: NodeId = NodeId(*b"AAA");
const GOAL: NodeId = NodeId(*b"ZZZ");

/// One step of the cyclic instruction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Left,
    Right,
}

impl Instruction {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Fixed-width 3-character node label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId([u8; 3]);

impl NodeId {
    /// Build a label from exactly three ASCII-alphanumeric characters.
    pub fn new(s: &str) -> Option<Self> {
        match s.as_bytes() {
            &[a, b, c] if s.bytes().all(|byte| byte.is_ascii_alphanumeric()) => {
                Some(Self([a, b, c]))
            }
            _ => None,
        }
    }

    /// True iff the label's final character is `c`.
    pub fn ends_with(self, c: char) -> bool {
        char::from(self.0[2]) == c
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            fmt::Write::write_char(f, char::from(byte))?;
        }
        Ok(())
    }
}

/// Errors raised while walking the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The walk stepped onto a node that has no definition.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    /// The walk revisited a (node, cursor) state, so no terminal node is
    /// reachable.
    #[error("No terminal node reachable from {start}: walk state repeated after {steps} steps")]
    Unreachable { start: NodeId, steps: u64 },
}

impl From<TraversalError> for SolveError {
    fn from(err: TraversalError) -> Self {
        SolveError::SolveFailed(Box::new(err))
    }
}

/// The instruction sequence plus the immutable node map. Built once at
/// parse time; duplicate node definitions keep the last one.
#[derive(Debug, Clone)]
pub struct Network {
    instructions: Vec<Instruction>,
    nodes: HashMap<NodeId, (NodeId, NodeId)>,
}

impl Network {
    /// Number of steps from `start` until `is_terminal` holds for the
    /// current node. The terminal test runs after each step, so a
    /// self-looping terminal node yields 1, not 0.
    ///
    /// The walk is fully determined by the (node, cursor) pair, so a
    /// repeated pair can only retrace itself; the walk fails with
    /// [`TraversalError::Unreachable`] at that point instead of looping
    /// forever. The pair space is finite (nodes x instruction length),
    /// which bounds the walk.
    pub fn path_len(
        &self,
        start: NodeId,
        is_terminal: impl Fn(NodeId) -> bool,
    ) -> Result<u64, TraversalError> {
        let len = self.instructions.len();
        let mut seen = HashSet::new();
        let mut at = start;
        let mut steps = 0u64;
        loop {
            let cursor = (steps % len as u64) as usize;
            if !seen.insert((at, cursor)) {
                return Err(TraversalError::Unreachable { start, steps });
            }
            let &(left, right) = self
                .nodes
                .get(&at)
                .ok_or(TraversalError::UnknownNode(at))?;
            at = match self.instructions[cursor] {
                Instruction::Left => left,
                Instruction::Right => right,
            };
            steps += 1;
            if is_terminal(at) {
                return Ok(steps);
            }
        }
    }

    /// Combined step count at which every `is_start` node's walk stands on
    /// a terminal node, folded as the least common multiple of the
    /// individual path lengths. An empty start set yields 1, the LCM
    /// identity.
    pub fn ghost_path_len(
        &self,
        is_start: impl Fn(NodeId) -> bool,
        is_terminal: impl Fn(NodeId) -> bool,
    ) -> Result<u64, TraversalError> {
        self.nodes
            .keys()
            .copied()
            .filter(|&node| is_start(node))
            .sorted()
            .map(|start| self.path_len(start, &is_terminal))
            .fold_ok(1, lcm)
    }
}

/// Parser for the instruction line and the `XXX = (YYY, ZZZ)` node
/// definitions. The compiled pattern lives in the parser value, not in
/// global state; construct one per parse.
struct NetworkParser {
    node_re: Regex,
}

impl NetworkParser {
    fn new() -> Self {
        // fixed pattern, compilation cannot fail
        Self {
            node_re: Regex::new(r"^([[:alnum:]]{3}) = \(([[:alnum:]]{3}), ([[:alnum:]]{3})\)$")
                .unwrap(),
        }
    }

    fn parse(&self, input: &str) -> Result<Network, ParseError> {
        let mut lines = input.lines().map(str::trim);

        let instructions = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or_else(|| ParseError::MalformedInput("empty instruction sequence".to_string()))?
            .chars()
            .map(|c| {
                Instruction::from_char(c).ok_or_else(|| {
                    ParseError::MalformedInput(format!("invalid instruction {c:?}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut nodes = HashMap::new();
        for line in lines.filter(|line| !line.is_empty()) {
            let caps = self.node_re.captures(line).ok_or_else(|| {
                ParseError::MalformedInput(format!("expected `XXX = (YYY, ZZZ)`, got {line:?}"))
            })?;
            let [node, left, right] = [1, 2, 3].map(|group| {
                // the alnum{3} capture groups guarantee the label shape
                NodeId::new(&caps[group]).ok_or_else(|| {
                    ParseError::MalformedInput(format!("bad node label in {line:?}"))
                })
            });
            nodes.insert(node?, (left?, right?));
        }
        if nodes.is_empty() {
            return Err(ParseError::MissingData("no node definitions".to_string()));
        }

        Ok(Network {
            instructions,
            nodes,
        })
    }
}

impl Solver for Day8 {
    type SharedData<'a> = Network;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        NetworkParser::new().parse(input)
    }

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .path_len(START, |node| node == GOAL)?
                .to_string()),
            2 => Ok(shared
                .ghost_path_len(|node| node.ends_with('A'), |node| node.ends_with('Z'))?
                .to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECT: &str = "RL\n\n\
        AAA = (BBB, CCC)\n\
        BBB = (DDD, EEE)\n\
        CCC = (ZZZ, GGG)\n\
        DDD = (DDD, DDD)\n\
        EEE = (EEE, EEE)\n\
        GGG = (GGG, GGG)\n\
        ZZZ = (ZZZ, ZZZ)";

    const WRAPPING: &str = "LLR\n\n\
        AAA = (BBB, BBB)\n\
        BBB = (AAA, ZZZ)\n\
        ZZZ = (ZZZ, ZZZ)";

    const GHOSTS: &str = "LR\n\n\
        11A = (11B, XXX)\n\
        11B = (XXX, 11Z)\n\
        11Z = (11B, XXX)\n\
        22A = (22B, XXX)\n\
        22B = (22C, 22C)\n\
        22C = (22Z, 22Z)\n\
        22Z = (22B, 22B)\n\
        XXX = (XXX, XXX)";

    fn network(input: &str) -> Network {
        Day8::parse(input).unwrap()
    }

    #[test]
    fn direct_walk_reaches_goal_in_two_steps() {
        let mut net = network(DIRECT);
        assert_eq!(Day8::solve_part(&mut net, 1).unwrap(), "2");
    }

    #[test]
    fn walk_wraps_instruction_sequence() {
        // LLR must be consumed twice: L, L, R, L, L, R
        let mut net = network(WRAPPING);
        assert_eq!(Day8::solve_part(&mut net, 1).unwrap(), "6");
    }

    #[test]
    fn ghost_walks_meet_at_lcm_of_path_lengths() {
        // 11A reaches 11Z every 2 steps, 22A reaches 22Z every 3
        let mut net = network(GHOSTS);
        assert_eq!(Day8::solve_part(&mut net, 2).unwrap(), "6");
    }

    #[test]
    fn self_looping_terminal_node_yields_one() {
        let net = network("L\n\nAAA = (AAA, AAA)");
        assert_eq!(net.path_len(START, |node| node == START).unwrap(), 1);
    }

    #[test]
    fn indented_node_lines_are_tolerated() {
        let net = network("RL\n\n\tAAA = (ZZZ, ZZZ)\n\t ZZZ = (ZZZ, ZZZ)");
        assert_eq!(net.path_len(START, |node| node == GOAL).unwrap(), 1);
    }

    #[test]
    fn duplicate_definition_keeps_last() {
        let net = network("L\n\nAAA = (BBB, BBB)\nAAA = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)");
        assert_eq!(net.path_len(START, |node| node == GOAL).unwrap(), 1);
    }

    #[test]
    fn missing_parentheses_are_malformed() {
        let err = Day8::parse("RL\n\nAAA = BBB, CCC").unwrap_err();
        assert!(matches!(err, ParseError::MalformedInput(_)));
    }

    #[test]
    fn empty_instruction_sequence_is_malformed() {
        let err = Day8::parse("\n\nAAA = (AAA, AAA)").unwrap_err();
        assert!(matches!(err, ParseError::MalformedInput(_)));
    }

    #[test]
    fn non_lr_instruction_is_malformed() {
        let err = Day8::parse("LQR\n\nAAA = (AAA, AAA)").unwrap_err();
        assert!(matches!(err, ParseError::MalformedInput(_)));
    }

    #[test]
    fn input_without_nodes_is_missing_data() {
        let err = Day8::parse("LR\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingData(_)));
    }

    #[test]
    fn dangling_edge_is_unknown_node() {
        let net = network("RL\n\nAAA = (BBB, BBB)");
        let err = net.path_len(START, |node| node == GOAL).unwrap_err();
        assert_eq!(err, TraversalError::UnknownNode(NodeId::new("BBB").unwrap()));
    }

    #[test]
    fn terminal_free_cycle_is_unreachable() {
        let net = network("L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)");
        let err = net.path_len(START, |node| node == GOAL).unwrap_err();
        assert!(matches!(err, TraversalError::Unreachable { start, .. } if start == START));
    }

    #[test]
    fn empty_start_set_yields_identity() {
        let net = network(DIRECT);
        let combined = net
            .ghost_path_len(|node| node.ends_with('Q'), |node| node.ends_with('Z'))
            .unwrap();
        assert_eq!(combined, 1);
    }

    #[test]
    fn single_start_ghost_walk_equals_its_path_len() {
        // AAA is the only ..A node in the direct sample
        let net = network(DIRECT);
        let combined = net
            .ghost_path_len(|node| node.ends_with('A'), |node| node.ends_with('Z'))
            .unwrap();
        assert_eq!(combined, 2);
    }
}
