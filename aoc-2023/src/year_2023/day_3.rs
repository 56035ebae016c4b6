//! Day 3: Gear Ratios

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// A run of digits on one schematic row; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNumber {
    pub value: u64,
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl PartNumber {
    /// Whether `(row, col)` touches this number, diagonals included.
    pub fn is_adjacent(&self, row: usize, col: usize) -> bool {
        row.abs_diff(self.row) <= 1 && col + 1 >= self.start && col <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub glyph: char,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Schematic {
    pub numbers: Vec<PartNumber>,
    pub symbols: Vec<Symbol>,
}

impl Schematic {
    fn adjacent_numbers<'s>(&'s self, symbol: &'s Symbol) -> impl Iterator<Item = &'s PartNumber> + 's {
        self.numbers
            .iter()
            .filter(move |number| number.is_adjacent(symbol.row, symbol.col))
    }

    /// Numbers touching at least one symbol.
    pub fn part_numbers(&self) -> impl Iterator<Item = &PartNumber> + '_ {
        self.numbers.iter().filter(|number| {
            self.symbols
                .iter()
                .any(|symbol| number.is_adjacent(symbol.row, symbol.col))
        })
    }

    /// Products of the two numbers around each `*` that touches exactly two.
    pub fn gear_ratios(&self) -> impl Iterator<Item = u64> + '_ {
        self.symbols
            .iter()
            .filter(|symbol| symbol.glyph == '*')
            .filter_map(|symbol| match self.adjacent_numbers(symbol).collect::<Vec<_>>()[..] {
                [a, b] => Some(a.value * b.value),
                _ => None,
            })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut schematic = Schematic::default();

        for (row, line) in input.lines().map(str::trim_end).enumerate() {
            for found in NUMBER.find_iter(line) {
                let value = found.as_str().parse().map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) '{}': {}", row + 1, found.as_str(), e))
                })?;
                schematic.numbers.push(PartNumber {
                    value,
                    row,
                    start: found.start(),
                    end: found.end(),
                });
            }

            schematic.symbols.extend(
                line.char_indices()
                    .filter(|&(_, glyph)| glyph != '.' && !glyph.is_ascii_digit())
                    .map(|(col, glyph)| Symbol { glyph, row, col }),
            );
        }

        tracing::debug!(
            numbers = schematic.numbers.len(),
            symbols = schematic.symbols.len(),
            "schematic parsed"
        );
        Ok(schematic)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared.part_numbers().map(|number| number.value).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.gear_ratios().sum::<u64>().to_string())
    }
}
