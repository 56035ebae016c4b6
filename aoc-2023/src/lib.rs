//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Each day is a `Solver` type in [`year_2023`] that uses the
//! `AutoRegisterSolver` derive macro, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find it.

pub mod utils;
pub mod year_2023;
