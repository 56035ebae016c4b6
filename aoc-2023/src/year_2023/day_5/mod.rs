//! Day 5: If You Give A Seed A Fertilizer
//!
//! The almanac chains seven range maps from `seed` to `location`. Part 1
//! maps individual seeds; part 2 reads the seed line as ranges spanning
//! billions of values and only evaluates the pipeline at its breakpoints.

mod pipeline;
mod range_map;

pub use pipeline::{Pipeline, SeedMode, SeedRange, Seeds};
pub use range_map::{MAX_VALUE, RangeMap, ShiftRule, Value};

use crate::utils::text::{numbers, paragraphs};
use anyhow::{Context, anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "ranges"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Almanac {
    seed_numbers: Vec<Value>,
    pipeline: Pipeline,
}

impl Almanac {
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Interpret the `seeds:` line.
    pub fn seeds(&self, mode: SeedMode) -> anyhow::Result<Seeds> {
        match mode {
            SeedMode::Flat => Ok(Seeds::Flat(self.seed_numbers.clone())),
            SeedMode::Ranged => {
                ensure!(
                    self.seed_numbers.len() % 2 == 0,
                    "seed ranges need an even count of numbers, got {}",
                    self.seed_numbers.len()
                );
                let ranges = self
                    .seed_numbers
                    .iter()
                    .tuples()
                    .map(|(&start, &length)| SeedRange { start, length })
                    .collect();
                Ok(Seeds::Ranged(ranges))
            }
        }
    }
}

/// Parse an almanac and interpret its seeds according to `mode`.
pub fn build(input: &str, mode: SeedMode) -> Result<(Pipeline, Seeds), ParseError> {
    let almanac = parse_almanac(input).map_err(ParseError::invalid)?;
    let seeds = almanac.seeds(mode).map_err(ParseError::invalid)?;
    Ok((almanac.pipeline, seeds))
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let blocks = paragraphs(input);
    let (seed_block, map_blocks) = blocks.split_first().ok_or_else(|| anyhow!("empty almanac"))?;

    let seed_line = match seed_block.as_slice() {
        [line] => line,
        _ => bail!("seed declaration must be a single line"),
    };
    let seed_numbers = seed_line
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("expected 'seeds:', got '{}'", seed_line))
        .and_then(numbers::<Value>)?;

    let stages = map_blocks
        .iter()
        .map(|block| parse_map(block))
        .collect::<anyhow::Result<Vec<_>>>()?;
    ensure!(!stages.is_empty(), "almanac has no maps");

    Ok(Almanac {
        seed_numbers,
        pipeline: Pipeline::new(stages)?,
    })
}

fn parse_map(lines: &[&str]) -> anyhow::Result<RangeMap> {
    let (header, rule_lines) = lines.split_first().ok_or_else(|| anyhow!("empty map"))?;
    let (source, target) = header
        .strip_suffix(" map:")
        .and_then(|categories| categories.split_once("-to-"))
        .ok_or_else(|| anyhow!("malformed map header '{}'", header))?;

    let rules = rule_lines
        .iter()
        .map(|line| -> anyhow::Result<ShiftRule> {
            let (destination, source, length) = numbers::<Value>(line)?
                .into_iter()
                .collect_tuple()
                .ok_or_else(|| anyhow!("rule needs three numbers"))?;
            Ok(ShiftRule::new(destination, source, length))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .with_context(|| format!("in {}-to-{} map", source, target))?;

    Ok(RangeMap::new(source, target, rules))
}

fn lowest_location(almanac: &Almanac, mode: SeedMode) -> Result<String, SolveError> {
    let seeds = almanac
        .seeds(mode)
        .map_err(|e| SolveError::SolveFailed(e.into()))?;
    almanac
        .pipeline
        .lowest_output(&seeds)
        .map(|location| location.to_string())
        .ok_or_else(|| SolveError::SolveFailed("no seeds declared".into()))
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_location(shared, SeedMode::Flat)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_location(shared, SeedMode::Ranged)
    }
}
