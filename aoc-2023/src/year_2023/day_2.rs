//! Day 2: Cube Conundrum

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

/// The bag part 1 checks every game against.
const BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    /// Per-colour maximum of both sets.
    pub fn union(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    pub fn fits_within(&self, bag: &CubeSet) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    pub fn power(&self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<CubeSet>,
}

impl Game {
    /// Fewest cubes of each colour that make every draw possible.
    pub fn minimal_bag(&self) -> CubeSet {
        self.draws
            .iter()
            .fold(CubeSet::default(), |bag, draw| bag.union(*draw))
    }
}

fn parse_draw(text: &str) -> anyhow::Result<CubeSet> {
    let mut draw = CubeSet::default();
    for entry in text.split(',') {
        let (count, colour) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<count> <colour>', got '{}'", entry.trim()))?;
        let count: u32 = count.parse().with_context(|| format!("bad count '{}'", count))?;
        match colour {
            "red" => draw.red += count,
            "green" => draw.green += count,
            "blue" => draw.blue += count,
            other => bail!("unknown colour '{}'", other),
        }
    }
    Ok(draw)
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (header, draws) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after game id"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected 'Game <id>', got '{}'", header))?
        .trim()
        .parse()
        .context("bad game id")?;
    let draws = draws
        .split(';')
        .map(parse_draw)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Game { id, draws })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                parse_game(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_within(&BAG)))
            .map(|game| game.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared.iter().map(|game| game.minimal_bag().power()).sum();
        Ok(sum.to_string())
    }
}
