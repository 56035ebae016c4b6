//! Turns registry metadata into work items and runs them

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::CliError;
use crate::inputs::InputStore;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Outcome of one part of one day.
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Errors are shared between the parts of a day that failed together
    pub answer: Result<String, Arc<CliError>>,
    /// `None` when the input never parsed
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A day to parse once, and the parts to solve from that parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()?;

        Ok(Self {
            registry,
            inputs: config.input_store(),
            parallelize_by: config.parallelize_by,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            thread_pool,
        })
    }

    /// Registered days that pass the year, day and part filters.
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(self.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .sorted_by_key(|w| (w.year, w.day))
            .collect()
    }

    /// Run every work item; results come back in (year, day, part) order
    pub fn execute(&self, work_items: &[WorkItem]) -> Vec<SolverResult> {
        let registry = &self.registry;
        let inputs = &self.inputs;

        match self.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .flat_map(|work| run_work_item(work, registry, inputs))
                .collect(),
            ParallelizeBy::Day => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .map(|work| run_work_item(work, registry, inputs))
                    .collect::<Vec<_>>()
                    .into_iter()
                    .flatten()
                    .collect()
            }),
        }
    }
}

/// Parts of a `max_parts` solver selected by `--part`.
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

/// One error result per part of `work`
fn error_results(work: &WorkItem, error: CliError) -> Vec<SolverResult> {
    let error = Arc::new(error);
    work.parts
        .clone()
        .map(|part| SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(Arc::clone(&error)),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        })
        .collect()
}

/// Read the input, parse it once and solve the requested parts in order
fn run_work_item(work: &WorkItem, registry: &SolverRegistry, inputs: &InputStore) -> Vec<SolverResult> {
    let (year, day) = (work.year, work.day);

    let input = match inputs.get(year, day) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(year, day, error = %e, "skipping day without input");
            return error_results(work, e.into());
        }
    };

    let mut solver = match registry.create_solver(year, day, &input) {
        Ok(solver) => solver,
        Err(e) => return error_results(work, e.into()),
    };
    let parse_duration = solver.parse_duration();
    tracing::debug!(year, day, parse_us = parse_duration.num_microseconds(), "input parsed");

    work.parts
        .clone()
        .map(|part| {
            let (answer, solve_duration) = match solver.solve(part) {
                Ok(result) => {
                    let duration = result.duration();
                    (Ok(result.answer), duration)
                }
                Err(e) => (
                    Err(Arc::new(CliError::Solver(SolverError::SolveError(e)))),
                    TimeDelta::zero(),
                ),
            };
            SolverResult {
                year,
                day,
                part,
                answer,
                parse_duration: Some(parse_duration),
                solve_duration,
            }
        })
        .collect()
}
