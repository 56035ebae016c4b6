//! Command-line surface of the `aoc` binary

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How work items are spread over the thread pool.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// One item after another on the calling thread
    Sequential,
    /// Days run concurrently; the parts of one day share its parsed input
    #[default]
    Day,
}

#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2023 solvers", version)]
pub struct Args {
    /// Only run this year
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Only run this day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Only run this part
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying all of these tags, e.g. `2023,ranges`
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Input file for the selected day, overriding the input directory
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Worker threads [default: available parallelism]
    #[arg(long)]
    pub threads: Option<usize>,

    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Print bare answers, no timings or summary
    #[arg(short, long)]
    pub quiet: bool,
}
