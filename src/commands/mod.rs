//! Command implementations

pub mod interactive;
pub mod solve;

pub use interactive::{Command, run_interactive};
pub use solve::{CombinationsResult, SolveResult, combinations_for_rows, solve_rows};
