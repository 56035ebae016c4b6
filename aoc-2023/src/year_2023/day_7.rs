//! Day 7: Camel Cards

use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct Solver;

const JOKER: u8 = b'J';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; 5],
    pub bid: u64,
}

/// Rank of a card label; with jokers, `J` is weaker than `2`.
fn card_strength(card: u8, jokers: bool) -> u8 {
    match card {
        b'2'..=b'9' => card - b'0',
        b'T' => 10,
        JOKER if jokers => 1,
        JOKER => 11,
        b'Q' => 12,
        b'K' => 13,
        _ => 14,
    }
}

impl Hand {
    /// Type of the hand; with jokers every `J` joins the largest group of
    /// other cards.
    pub fn hand_type(&self, jokers: bool) -> HandType {
        let joker_count = if jokers {
            self.cards.iter().filter(|&&card| card == JOKER).count()
        } else {
            0
        };
        let mut groups: Vec<usize> = self
            .cards
            .iter()
            .filter(|&&card| !jokers || card != JOKER)
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        match groups.first_mut() {
            Some(largest) => *largest += joker_count,
            None => groups.push(joker_count),
        }

        match groups[..] {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    fn sort_key(&self, jokers: bool) -> (HandType, [u8; 5]) {
        (
            self.hand_type(jokers),
            self.cards.map(|card| card_strength(card, jokers)),
        )
    }
}

/// Sum of `bid * rank` with the weakest hand ranked 1.
pub fn total_winnings(hands: &[Hand], jokers: bool) -> u64 {
    hands
        .iter()
        .sorted_by_cached_key(|hand| hand.sort_key(jokers))
        .zip(1..)
        .map(|(hand, rank)| hand.bid * rank)
        .sum()
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected '<cards> <bid>'"))?;
    ensure!(
        cards.len() == 5 && cards.bytes().all(|card| b"23456789TJQKA".contains(&card)),
        "'{}' is not five card labels",
        cards
    );
    let mut hand = [0; 5];
    hand.copy_from_slice(cards.as_bytes());
    Ok(Hand {
        cards: hand,
        bid: bid.parse().with_context(|| format!("bad bid '{}'", bid))?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                parse_hand(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    fn hand(cards: &str) -> Hand {
        parse_hand(&format!("{} 1", cards)).unwrap()
    }

    #[test]
    fn example_part_1() {
        let mut hands = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut hands, 1).unwrap(), "6440");
    }

    #[test]
    fn example_part_2() {
        let mut hands = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut hands, 2).unwrap(), "5905");
    }

    #[test]
    fn hand_types_without_jokers() {
        assert_eq!(hand("AAAAA").hand_type(false), HandType::FiveOfAKind);
        assert_eq!(hand("AA8AA").hand_type(false), HandType::FourOfAKind);
        assert_eq!(hand("23332").hand_type(false), HandType::FullHouse);
        assert_eq!(hand("TTT98").hand_type(false), HandType::ThreeOfAKind);
        assert_eq!(hand("23432").hand_type(false), HandType::TwoPair);
        assert_eq!(hand("A23A4").hand_type(false), HandType::OnePair);
        assert_eq!(hand("23456").hand_type(false), HandType::HighCard);
    }

    #[test]
    fn jokers_join_the_largest_group() {
        assert_eq!(hand("KTJJT").hand_type(true), HandType::FourOfAKind);
        assert_eq!(hand("JJJJJ").hand_type(true), HandType::FiveOfAKind);
        assert_eq!(hand("2345J").hand_type(true), HandType::OnePair);
        assert_eq!(hand("2233J").hand_type(true), HandType::FullHouse);
    }

    #[test]
    fn joker_is_weakest_on_ties() {
        let hands = [hand("JKKK2"), hand("QQQQ2")];
        // Both are four of a kind with jokers; J loses to Q on the first card
        assert!(hands[0].sort_key(true) < hands[1].sort_key(true));
        assert!(hands[0].sort_key(false) < hands[1].sort_key(false));
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(Solver::parse("32X3K 765\n").is_err());
    }
}
