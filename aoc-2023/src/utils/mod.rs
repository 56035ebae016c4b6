//! Helpers shared by several days

pub mod number;
pub mod text;
pub mod tree;
