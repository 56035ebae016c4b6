//! Parse-once, solve-per-part traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the state every part works on.
///
/// The state may borrow from the input: `SharedData<'a>` is tied to the
/// lifetime of the text handed to [`AocParser::parse`].
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Histories;
///
/// impl AocParser for Histories {
///     type SharedData<'a> = Vec<Vec<i64>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.split_whitespace()
///                     .map(|token| token.parse().map_err(ParseError::invalid))
///                     .collect::<Result<Vec<_>, _>>()
///             })
///             .collect()
///     }
/// }
///
/// let parsed = Histories::parse("0 3 6\n1 3 6").unwrap();
/// assert_eq!(parsed, vec![vec![0, 3, 6], vec![1, 3, 6]]);
/// ```
pub trait AocParser {
    /// Parsed input, plus whatever a part wants to leave behind for later
    /// parts.
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N` from the shared state.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Lines {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let longest = shared.iter().map(|line| line.len()).max();
///         longest
///             .map(|len| len.to_string())
///             .ok_or_else(|| SolveError::SolveFailed("no lines".into()))
///     }
/// }
///
/// let mut lines = Lines::parse("ab\nabcd").unwrap();
/// assert_eq!(<Lines as PartSolver<1>>::solve(&mut lines).unwrap(), "4");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A solver the registry can drive part by part.
///
/// Normally produced by `#[derive(AocSolver)]`, which routes `solve_part`
/// to each [`PartSolver`] impl; implementing it by hand is also fine.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct SeedLine;
///
/// impl AocParser for SeedLine {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let numbers = input
///             .strip_prefix("seeds:")
///             .ok_or_else(|| ParseError::MissingData("seeds:".to_string()))?;
///         numbers
///             .split_whitespace()
///             .map(|n| n.parse().map_err(ParseError::invalid))
///             .collect()
///     }
/// }
///
/// impl Solver for SeedLine {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().min().copied().unwrap_or_default().to_string()),
///             2 => Ok(shared.chunks(2).map(|pair| pair.iter().product::<u64>()).sum::<u64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut seeds = SeedLine::parse("seeds: 79 14 55 13").unwrap();
/// assert_eq!(SeedLine::solve_part(&mut seeds, 1).unwrap(), "13");
/// assert_eq!(SeedLine::solve_part(&mut seeds, 2).unwrap(), "1821");
/// ```
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Answer for `part`.
    ///
    /// Parts without an implementation return
    /// [`SolveError::PartNotImplemented`].
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds-checked entry point used by type-erased solver instances.
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// with [`SolveError::PartOutOfRange`] before the solver sees them.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if !(1..=Self::PARTS).contains(&part) {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
