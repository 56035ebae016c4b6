//! Result lines and the closing summary

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

pub struct OutputFormatter {
    quiet: bool,
    started: Instant,
}

/// Time spent by the parts that produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Totals {
    solved: usize,
    failed: usize,
    parse: TimeDelta,
    solve: TimeDelta,
}

impl Totals {
    fn of(results: &[SolverResult]) -> Self {
        let empty = Self {
            solved: 0,
            failed: 0,
            parse: TimeDelta::zero(),
            solve: TimeDelta::zero(),
        };
        results.iter().fold(empty, |mut totals, result| {
            if result.answer.is_ok() {
                totals.solved += 1;
                totals.parse += result.parse_duration.unwrap_or_else(TimeDelta::zero);
                totals.solve += result.solve_duration;
            } else {
                totals.failed += 1;
            }
            totals
        })
    }
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started: Instant::now(),
        }
    }

    /// Answers go to stdout and failures to stderr. Quiet mode prints the
    /// bare answer only.
    pub fn print_result(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) if self.quiet => println!("{}", answer),
            Ok(_) => println!("{}", format_result(result)),
            Err(e) if self.quiet => eprintln!("error: {}", e),
            Err(_) => eprintln!("{}", format_result(result)),
        }
    }

    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let totals = Totals::of(results);
        let wall = TimeDelta::from_std(self.started.elapsed()).unwrap_or(TimeDelta::MAX);

        println!();
        println!("{} solved, {} failed", totals.solved, totals.failed);
        println!(
            "parse {} + solve {} in {} wall-clock",
            format_duration(totals.parse),
            format_duration(totals.solve),
            format_duration(wall)
        );

        // Above 1.00x only when days overlapped on the pool
        let busy = totals.parse + totals.solve;
        if let (Some(busy), Some(wall)) = (busy.num_microseconds(), wall.num_microseconds()) {
            if wall > 0 {
                println!("parallel speedup {:.2}x", busy as f64 / wall as f64);
            }
        }
    }
}

/// `2023/05 Part 1: 35 (parse: 12µs, solve: 3µs)`, or the error in place of
/// the answer.
pub fn format_result(result: &SolverResult) -> String {
    let label = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    let answer = match &result.answer {
        Ok(answer) => answer,
        Err(e) => return format!("{}: Error - {}", label, e),
    };
    let parse = match result.parse_duration {
        Some(parse) => format!("parse: {}, ", format_duration(parse)),
        None => String::new(),
    };
    format!(
        "{}: {} ({}solve: {})",
        label,
        answer,
        parse,
        format_duration(result.solve_duration)
    )
}

/// Microseconds below a millisecond, then milliseconds, then seconds.
pub fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_duration(-d)),
        Some(micros @ 0..1_000) => format!("{}µs", micros),
        Some(micros @ 1_000..1_000_000) => format!("{:.2}ms", micros as f64 / 1e3),
        Some(micros) => format!("{:.2}s", micros as f64 / 1e6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, InputError};
    use proptest::prelude::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn solved(day: u8, parse: Option<i64>, solve: i64) -> SolverResult {
        SolverResult {
            year: 2023,
            day,
            part: 1,
            answer: Ok("35".to_string()),
            parse_duration: parse.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(solve),
        }
    }

    fn missing_input(day: u8) -> SolverResult {
        SolverResult {
            year: 2023,
            day,
            part: 2,
            answer: Err(Arc::new(CliError::Input(InputError::Missing {
                year: 2023,
                day,
                path: PathBuf::from(format!("inputs/2023_day{:02}.txt", day)),
            }))),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn durations_pick_a_readable_unit() {
        assert_eq!(format_duration(TimeDelta::microseconds(12)), "12µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-3)), "-3µs");
    }

    #[test]
    fn answered_part_shows_both_timings() {
        assert_eq!(
            format_result(&solved(5, Some(12), 3)),
            "2023/05 Part 1: 35 (parse: 12µs, solve: 3µs)"
        );
        assert_eq!(
            format_result(&solved(5, None, 3)),
            "2023/05 Part 1: 35 (solve: 3µs)"
        );
    }

    #[test]
    fn failed_part_shows_the_error() {
        let line = format_result(&missing_input(7));
        assert!(line.starts_with("2023/07 Part 2: Error - "));
        assert!(line.contains("inputs/2023_day07.txt"));
    }

    #[test]
    fn totals_only_count_time_of_answered_parts() {
        let results = [solved(1, Some(10), 5), missing_input(2), solved(3, None, 7)];
        let totals = Totals::of(&results);
        assert_eq!(totals.solved, 2);
        assert_eq!(totals.failed, 1);
        assert_eq!(totals.parse, TimeDelta::microseconds(10));
        assert_eq!(totals.solve, TimeDelta::microseconds(12));
    }

    proptest! {
        #[test]
        fn duration_unit_matches_magnitude(micros in 0i64..10_000_000_000) {
            let text = format_duration(TimeDelta::microseconds(micros));
            let unit = text.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.');
            let expected = match micros {
                0..1_000 => "µs",
                1_000..1_000_000 => "ms",
                _ => "s",
            };
            prop_assert_eq!(unit, expected, "{} for {}µs", text, micros);
        }
    }
}
