//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(Debug)]
struct Readings {
    values: Vec<i64>,
    cached_min: Option<i64>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct MinMaxSolver;

impl AocParser for MinMaxSolver {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .split_whitespace()
            .map(|token| token.parse().map_err(ParseError::invalid))
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(Readings {
            values,
            cached_min: None,
        })
    }
}

impl PartSolver<1> for MinMaxSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let min = shared
            .values
            .iter()
            .copied()
            .min()
            .ok_or_else(|| SolveError::SolveFailed("no readings".into()))?;
        shared.cached_min = Some(min);
        Ok(min.to_string())
    }
}

impl PartSolver<2> for MinMaxSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let max = shared.values.iter().copied().max().unwrap_or_default();
        Ok((max - shared.cached_min.unwrap_or(max)).to_string())
    }
}

fn render(values: &[i64]) -> String {
    values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(N)` gives the same answer as calling `PartSolver<N>` directly
    #[test]
    fn solve_part_dispatches_to_part_solver(
        values in prop::collection::vec(-1000i64..1000, 1..20),
    ) {
        let input = render(&values);
        let mut via_dispatch = <MinMaxSolver as AocParser>::parse(&input).unwrap();
        let mut direct = <MinMaxSolver as AocParser>::parse(&input).unwrap();

        prop_assert_eq!(
            <MinMaxSolver as Solver>::solve_part(&mut via_dispatch, 1).unwrap(),
            <MinMaxSolver as PartSolver<1>>::solve(&mut direct).unwrap()
        );
        prop_assert_eq!(
            <MinMaxSolver as Solver>::solve_part(&mut via_dispatch, 2).unwrap(),
            <MinMaxSolver as PartSolver<2>>::solve(&mut direct).unwrap()
        );
    }

    /// Parts outside `1..=max_parts` are reported as not implemented
    #[test]
    fn unknown_part_is_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = <MinMaxSolver as AocParser>::parse("1 2 3").unwrap();

        match <MinMaxSolver as Solver>::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    /// State cached by part 1 is visible to part 2
    #[test]
    fn part_two_sees_part_one_cache(values in prop::collection::vec(-1000i64..1000, 1..20)) {
        let input = render(&values);
        let min = *values.iter().min().unwrap();
        let max = *values.iter().max().unwrap();

        let mut shared = <MinMaxSolver as AocParser>::parse(&input).unwrap();
        prop_assert_eq!(<MinMaxSolver as Solver>::solve_part(&mut shared, 1).unwrap(), min.to_string());
        prop_assert_eq!(shared.cached_min, Some(min));
        prop_assert_eq!(
            <MinMaxSolver as Solver>::solve_part(&mut shared, 2).unwrap(),
            (max - min).to_string()
        );
    }
}

#[test]
fn derived_parts_constant_matches_attribute() {
    assert_eq!(<MinMaxSolver as Solver>::PARTS, 2);
}

#[test]
fn solve_failure_is_propagated() {
    let mut shared = <MinMaxSolver as AocParser>::parse("").unwrap();
    let result = <MinMaxSolver as Solver>::solve_part(&mut shared, 1);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}
