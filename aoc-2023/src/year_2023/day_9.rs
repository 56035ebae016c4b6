//! Day 9: Mirage Maintenance

use crate::utils::text::numbers;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["2023", "sequences"])]
pub struct Solver;

/// The sequence followed by its repeated differences, down to the first
/// level that is all zeros.
fn difference_levels(history: &[i64]) -> Vec<Vec<i64>> {
    let mut levels = vec![history.to_vec()];
    while let Some(level) = levels.last().filter(|level| level.iter().any(|&v| v != 0)) {
        let next = level.windows(2).map(|pair| pair[1] - pair[0]).collect();
        levels.push(next);
    }
    levels
}

pub fn extrapolate_next(history: &[i64]) -> i64 {
    difference_levels(history)
        .iter()
        .filter_map(|level| level.last())
        .sum()
}

pub fn extrapolate_previous(history: &[i64]) -> i64 {
    difference_levels(history)
        .iter()
        .rev()
        .fold(0, |below, level| level.first().map_or(below, |&first| first - below))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                numbers(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i64 = shared.iter().map(|history| extrapolate_next(history)).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i64 = shared.iter().map(|history| extrapolate_previous(history)).sum();
        Ok(sum.to_string())
    }
}
