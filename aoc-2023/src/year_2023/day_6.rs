//! Day 6: Wait For It

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    fn beats_record(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.record)
    }

    /// Number of whole-millisecond hold times that travel farther than the
    /// record.
    ///
    /// The distance `h * (time - h)` is symmetric around `time / 2`, so the
    /// winners are `low..=time - low`. `low` starts from the smaller root of
    /// `h^2 - time*h + record = 0` and is corrected with exact integer checks.
    pub fn ways_to_win(&self) -> u64 {
        let half = self.time / 2;
        if !self.beats_record(half) {
            return 0;
        }

        let time = self.time as f64;
        let discriminant = time * time - 4.0 * self.record as f64;
        let estimate = ((time - discriminant.sqrt()) / 2.0).floor();
        let mut low = (estimate.max(0.0) as u64).min(half);

        while low > 0 && self.beats_record(low - 1) {
            low -= 1;
        }
        while !self.beats_record(low) {
            low += 1;
        }

        self.time - 2 * low + 1
    }
}

/// The two labelled rows of the sheet, kept as digit tokens so part 2 can
/// join them.
#[derive(Debug, Clone)]
pub struct RaceSheet<'a> {
    times: Vec<&'a str>,
    records: Vec<&'a str>,
}

impl RaceSheet<'_> {
    pub fn races(&self) -> anyhow::Result<Vec<Race>> {
        self.times
            .iter()
            .zip(&self.records)
            .map(|(time, record)| -> anyhow::Result<Race> {
                Ok(Race {
                    time: time.parse()?,
                    record: record.parse()?,
                })
            })
            .collect()
    }

    /// One race whose numbers are each row's digits run together.
    pub fn joined_race(&self) -> anyhow::Result<Race> {
        Ok(Race {
            time: self.times.concat().parse()?,
            record: self.records.concat().parse()?,
        })
    }
}

fn parse_row<'a>(line: &'a str, label: &str) -> anyhow::Result<Vec<&'a str>> {
    let values = line
        .trim()
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| anyhow!("expected '{}:' row", label))?;
    let tokens: Vec<&str> = values.split_whitespace().collect();
    for token in &tokens {
        ensure!(
            token.bytes().all(|b| b.is_ascii_digit()),
            "'{}' is not a number",
            token
        );
    }
    Ok(tokens)
}

fn parse_sheet(input: &str) -> anyhow::Result<RaceSheet<'_>> {
    let (times, records) = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected exactly a Time row and a Distance row"))?;
    let sheet = RaceSheet {
        times: parse_row(times, "Time")?,
        records: parse_row(records, "Distance")?,
    };
    ensure!(
        sheet.times.len() == sheet.records.len(),
        "{} times but {} distances",
        sheet.times.len(),
        sheet.records.len()
    );
    ensure!(!sheet.times.is_empty(), "no races");
    Ok(sheet)
}

impl AocParser for Solver {
    type SharedData<'a> = RaceSheet<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_sheet(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let races = shared.races().map_err(|e| SolveError::SolveFailed(e.into()))?;
        let product: u64 = races.iter().map(Race::ways_to_win).product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let race = shared
            .joined_race()
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        Ok(race.ways_to_win().to_string())
    }
}
