//! One-shot commands
//!
//! Solve or enumerate a fixed list of rows given on the command line.

use crate::core::Row;
use crate::error::SolverError;
use crate::solver::{Constraints, Solver};

/// Result of narrowing a fixed list of rows
#[derive(Debug)]
pub struct SolveResult {
    pub rows: Vec<Row>,
    pub constraints: Constraints,
    pub words: Vec<String>,
}

/// Result of counting (and optionally listing) raw combinations
#[derive(Debug)]
pub struct CombinationsResult {
    pub count: usize,
    pub combinations: Option<Vec<String>>,
}

/// Find the dictionary words consistent with `rows`
///
/// # Errors
/// Fails on the first invalid row, on an empty row list, or when the rows
/// contradict each other.
pub fn solve_rows<S: AsRef<str>>(solver: &Solver, rows: &[S]) -> Result<SolveResult, SolverError> {
    let mut session = solver.new_session();
    for raw in rows {
        session.push(raw.as_ref())?;
    }

    let constraints = solver.constraints(&session)?;
    let words = solver.find_words(&session)?;

    Ok(SolveResult {
        rows: session.rows().to_vec(),
        constraints,
        words,
    })
}

/// Count the unfiltered combinations for `rows`, listing them if asked
///
/// # Errors
/// Fails on the first invalid row, on an empty row list, or when the rows
/// contradict each other.
pub fn combinations_for_rows<S: AsRef<str>>(
    solver: &Solver,
    rows: &[S],
    list: bool,
) -> Result<CombinationsResult, SolverError> {
    let mut session = solver.new_session();
    for raw in rows {
        session.push(raw.as_ref())?;
    }

    if session.is_empty() {
        return Err(SolverError::EmptySession);
    }

    let count = solver.combination_count(&session)?;
    let combinations = if list {
        Some(solver.combinations(&session)?)
    } else {
        None
    };

    Ok(CombinationsResult {
        count,
        combinations,
    })
}
