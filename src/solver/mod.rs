//! Candidate narrowing
//!
//! Rows are folded into per-position constraints, expanded into candidate
//! strings, then filtered against the dictionary in parallel.

mod constraints;
mod engine;
mod filter;
mod generator;
mod letters;

pub use constraints::{Constraints, accumulate};
pub use engine::Solver;
pub use filter::{filter_candidates, filter_sequential};
pub use generator::{Combinations, generate};
pub use letters::LetterSet;
