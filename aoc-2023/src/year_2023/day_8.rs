//! Day 8: Haunted Wasteland

use crate::utils::number::lcm;
use crate::utils::text::paragraphs;
use crate::utils::tree::{BinaryTree, NodeId, Turn};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["2023", "graph", "math"])]
pub struct Solver;

static NODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*=\s*\((\w+),\s*(\w+)\)$").unwrap());

#[derive(Debug, Clone)]
pub struct Network<'a> {
    pub instructions: Vec<Turn>,
    pub tree: BinaryTree<&'a str>,
}

impl Network<'_> {
    fn steps(&self, source: NodeId, mut target_check: impl FnMut(&str) -> bool) -> anyhow::Result<u64> {
        self.tree
            .traverse_with_instructions(&self.instructions, source, |node| target_check(node.data))
    }

    /// Steps from `AAA` to `ZZZ`.
    pub fn steps_to_exit(&self) -> anyhow::Result<u64> {
        let source = self
            .tree
            .find(|&name| name == "AAA")
            .ok_or_else(|| anyhow!("no node named AAA"))?;
        self.steps(source, |name| name == "ZZZ")
    }

    /// Steps until every walk from a `..A` node stands on a `..Z` node at
    /// once, assuming each walk cycles back to its first `..Z` node with a
    /// period equal to the steps it took to reach it.
    pub fn ghost_steps(&self) -> anyhow::Result<u64> {
        let cycles = self
            .tree
            .ids()
            .filter(|&id| self.tree.node(id).data.ends_with('A'))
            .map(|id| self.steps(id, |name| name.ends_with('Z')))
            .collect::<anyhow::Result<Vec<_>>>()?;
        tracing::debug!(?cycles, "ghost cycle lengths");

        if cycles.is_empty() {
            bail!("no starting node ends with 'A'");
        }
        lcm(cycles).ok_or_else(|| anyhow!("step count overflows u64"))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let blocks = paragraphs(input);
    let [instruction_block, node_block] = blocks.as_slice() else {
        bail!("expected an instruction line and a node block");
    };
    let instructions = instruction_block
        .concat()
        .trim()
        .chars()
        .map(Turn::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let entries = node_block
        .iter()
        .map(|line| -> anyhow::Result<_> {
            let captures = NODE
                .captures(line.trim())
                .ok_or_else(|| anyhow!("malformed node '{}'", line))?;
            let [name, left, right] = [1, 2, 3].map(|group| captures.get(group).map_or("", |m| m.as_str()));
            Ok((name, left, right))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut tree = BinaryTree::new();
    let mut ids = HashMap::new();
    for &(name, _, _) in &entries {
        if ids.insert(name, tree.push(name)).is_some() {
            bail!("node '{}' declared twice", name);
        }
    }
    let lookup = |name: &str| {
        ids.get(name)
            .copied()
            .ok_or_else(|| anyhow!("link to undeclared node '{}'", name))
    };
    for &(name, left, right) in &entries {
        tree.link(lookup(name)?, lookup(left)?, lookup(right)?);
    }

    Ok(Network { instructions, tree })
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .steps_to_exit()
            .map(|steps| steps.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .ghost_steps()
            .map(|steps| steps.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    const REPEATING_EXAMPLE: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    const GHOST_EXAMPLE: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn example_part_1() {
        let mut network = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut network, 1).unwrap(), "2");
    }

    #[test]
    fn instructions_repeat_until_exit() {
        let mut network = Solver::parse(REPEATING_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut network, 1).unwrap(), "6");
    }

    #[test]
    fn example_part_2() {
        let mut network = Solver::parse(GHOST_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut network, 2).unwrap(), "6");
    }

    #[test]
    fn missing_start_fails_part_1() {
        let mut network = Solver::parse(GHOST_EXAMPLE).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut network, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn undeclared_link_is_rejected() {
        let input = "L\n\nAAA = (BBB, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        assert!(Solver::parse(input).is_err());
    }

    #[test]
    fn bad_instruction_is_rejected() {
        assert!(Solver::parse("LX\n\nAAA = (AAA, AAA)\n").is_err());
    }
}
