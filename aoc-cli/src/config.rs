//! Runtime settings resolved from the command line

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::inputs::InputStore;
use std::path::{Path, PathBuf};

/// Validated [`Args`] with paths expanded and defaults filled in.
///
/// `None` filters select everything.
#[derive(Debug)]
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    /// A solver must carry every one of these
    pub tags: Vec<String>,
    pub input_dir: PathBuf,
    /// Replaces the input directory lookup for `day_filter`
    pub input_file: Option<PathBuf>,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
}

impl Config {
    /// Rejects `--input` without `--day` and a zero thread count.
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && args.day.is_none() {
            return Err(CliError::Config("--input requires --day".to_string()));
        }

        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => available_threads(),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }

    pub fn input_store(&self) -> InputStore {
        let store = InputStore::new(self.input_dir.clone());
        match (&self.input_file, self.day_filter) {
            (Some(file), Some(day)) => store.with_override(self.year_filter, day, file.clone()),
            _ => store,
        }
    }
}

/// `~` and `~/rest` resolve against the home directory; other paths are
/// returned untouched.
fn expand_tilde(path: &Path) -> PathBuf {
    let home_relative = match path.strip_prefix("~") {
        Ok(rest) => rest,
        Err(_) => return path.to_path_buf(),
    };
    match dirs::home_dir() {
        Some(home) => home.join(home_relative),
        None => path.to_path_buf(),
    }
}

fn available_threads() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}
