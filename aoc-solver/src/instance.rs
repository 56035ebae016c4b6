//! Parsed puzzle state behind a type-erased, timed interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval covered by one parse or one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    fn measure<T>(work: impl FnOnce() -> T) -> (T, Self) {
        let start = Utc::now();
        let value = work();
        let end = Utc::now();
        (value, Self { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// One answered part.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// Shared data for one puzzle input, parsed once up front.
///
/// Parts run against the same `SharedData`, so a part may leave work behind
/// for the parts after it.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Span::measure(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parsed,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(result) => println!("{}: {} in {}", part, result.answer, result.duration()),
///             Err(e) => eprintln!("{}: {}", part, e),
///         }
///     }
///     println!("parsed in {}", solver.parse_duration());
/// }
/// ```
pub trait DynSolver {
    /// Fails with [`SolveError::PartOutOfRange`] for parts outside
    /// `1..=parts()`, otherwise with whatever the part itself reports.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_span(&self) -> Span;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, span) = Span::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            span,
        })
    }

    fn parse_span(&self) -> Span {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_span_is_ordered() {
        let (value, span) = Span::measure(|| (1..=100).sum::<u32>());
        assert_eq!(value, 5050);
        assert!(span.end >= span.start);
        assert!(span.duration() >= TimeDelta::zero());
    }
}
