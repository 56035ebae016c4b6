//! Day 1: Trebuchet?!

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "parsing"])]
pub struct Solver;

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// First and last digit of `line` read as a two-digit number.
///
/// With `spelled`, digit names count too. Matches may overlap, so `twone`
/// yields 2 then 1.
pub fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let mut digits = line.char_indices().filter_map(|(index, c)| {
        c.to_digit(10).or_else(|| {
            spelled
                .then(|| {
                    SPELLED_DIGITS
                        .iter()
                        .position(|word| line[index..].starts_with(word))
                })
                .flatten()
                .map(|position| position as u32 + 1)
        })
    });

    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}

fn calibration_sum(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(line_idx, line)| {
            calibration_value(line, spelled).ok_or_else(|| {
                SolveError::SolveFailed(format!("(line {}) no digit in '{}'", line_idx + 1, line).into())
            })
        })
        .sum::<Result<u32, _>>()
        .map(|sum| sum.to_string())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".to_string()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

    const SPELLED_EXAMPLE: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    #[test]
    fn example_part_1() {
        let mut lines = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut lines, 1).unwrap(), "142");
    }

    #[test]
    fn example_part_2() {
        let mut lines = Solver::parse(SPELLED_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut lines, 2).unwrap(), "281");
    }

    #[test]
    fn single_digit_is_used_twice() {
        assert_eq!(calibration_value("treb7uchet", false), Some(77));
    }

    #[test]
    fn spelled_digits_may_overlap() {
        assert_eq!(calibration_value("twone", true), Some(21));
        assert_eq!(calibration_value("eighthree", true), Some(83));
        assert_eq!(calibration_value("twone", false), None);
    }

    #[test]
    fn line_without_digits_fails_part_1() {
        let mut lines = Solver::parse("abc\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut lines, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn blank_input_is_missing_data() {
        assert!(matches!(Solver::parse("\n\n"), Err(ParseError::MissingData(_))));
    }
}
