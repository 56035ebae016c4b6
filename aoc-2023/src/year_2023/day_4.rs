//! Day 4: Scratchcards

use crate::utils::text::numbers;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "counting"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Card {
    pub id: u32,
    pub winning: HashSet<u32>,
    pub selected: Vec<u32>,
}

impl Card {
    /// Selected numbers that are also winning numbers.
    pub fn matches(&self) -> usize {
        self.selected
            .iter()
            .filter(|&number| self.winning.contains(number))
            .count()
    }

    /// `2^(matches - 1)`, or nothing without a match.
    pub fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            matches => 1 << (matches - 1),
        }
    }
}

/// Total cards held once every card has won copies of the `matches` cards
/// after it. Copies never extend past the last card.
pub fn total_cards(cards: &[Card]) -> u64 {
    let mut copies = vec![1_u64; cards.len()];
    for (index, card) in cards.iter().enumerate() {
        let won = index + 1..(index + 1 + card.matches()).min(cards.len());
        for next in won {
            copies[next] += copies[index];
        }
    }
    copies.iter().sum()
}

fn parse_card(line: &str) -> anyhow::Result<Card> {
    let (header, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after card id"))?;
    let id = header
        .strip_prefix("Card")
        .ok_or_else(|| anyhow!("expected 'Card <id>', got '{}'", header))?
        .trim()
        .parse()
        .context("bad card id")?;
    let (winning, selected) = body
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' between number lists"))?;
    Ok(Card {
        id,
        winning: numbers::<u32>(winning)?.into_iter().collect(),
        selected: numbers(selected)?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Card>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                parse_card(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Card::points).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_cards(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn example_part_1() {
        let mut cards = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut cards, 1).unwrap(), "13");
    }

    #[test]
    fn example_part_2() {
        let mut cards = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut cards, 2).unwrap(), "30");
    }

    #[test]
    fn points_double_per_match() {
        let cards = Solver::parse(EXAMPLE).unwrap();
        let points: Vec<u64> = cards.iter().map(Card::points).collect();
        assert_eq!(points, vec![8, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn copies_stop_at_last_card() {
        let cards = Solver::parse("Card 1: 1 2 | 1 2\n").unwrap();
        assert_eq!(total_cards(&cards), 1);
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert!(Solver::parse("Card 1: 1 2 3 4\n").is_err());
    }
}
