//! `aoc`: run the linked Advent of Code solvers against local inputs

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Linked for its `inventory` submissions
use aoc_2023 as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

fn main() {
    let args = Args::parse();
    setup_tracing();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout only carries answers
fn setup_tracing() {
    let env_filter = EnvFilter::builder().parse_lossy(
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "warn".to_string()),
    );
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    if let Err(e) = tracing_subscriber::registry().with(fmt).try_init() {
        eprintln!("Warning: tracing already initialised: {}", e);
    }
}

/// Run the selected solvers; `Ok(false)` when any part failed
fn run(args: Args) -> Result<bool, error::CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(?config, "configuration resolved");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(true);
    }

    let formatter = OutputFormatter::new(config.quiet);
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let results = executor.execute(&work_items);
    for result in &results {
        formatter.print_result(result);
    }
    formatter.print_summary(&results);

    Ok(results.iter().all(|r| r.answer.is_ok()))
}

/// Registry of every linked solver that carries all of `tags`.
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
