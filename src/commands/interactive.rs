//! Interactive line mode
//!
//! Reads one row or control token per line and keeps the session between
//! lines. Works over any reader/writer pair.

use crate::core::Session;
use crate::error::SolverError;
use crate::output::{
    print_banner, print_combination_count, print_error, print_rows, print_words,
};
use crate::solver::{Combinations, Solver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::time::Duration;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty line: filter candidates against the dictionary
    Search,
    /// `-`: drop the last row
    Undo,
    /// `q`: end the session
    Quit,
    /// `&`: enumerate raw combinations without the dictionary
    Combinations,
    /// Anything else, to be parsed as a feedback row
    Row(String),
}

impl Command {
    /// Classify one input line
    ///
    /// Surrounding whitespace, including the line terminator, is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Search,
            "-" => Self::Undo,
            "q" => Self::Quit,
            "&" => Self::Combinations,
            row => Self::Row(row.to_string()),
        }
    }
}

/// Run the interactive loop until `q` or end of input
///
/// Row, empty-session and contradiction errors are reported and the loop
/// continues; only I/O errors end it.
///
/// # Errors
///
/// Returns `SolverError::Io` if reading input or writing output fails.
pub fn run_interactive<R, W>(
    solver: &Solver,
    mut input: R,
    mut out: W,
    show_progress: bool,
) -> Result<Session, SolverError>
where
    R: BufRead,
    W: Write,
{
    let mut session = solver.new_session();
    print_banner(&mut out)?;

    loop {
        write!(out, ">: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Undo => {
                if session.undo().is_none() {
                    writeln!(out, "{}", "Nothing to undo.".yellow())?;
                }
                print_rows(&mut out, session.rows())?;
            }
            Command::Search => search(solver, &session, &mut out, show_progress)?,
            Command::Combinations => {
                combinations(solver, &session, &mut input, &mut out)?;
            }
            Command::Row(raw) => {
                let pushed = session.push(&raw).map(|_| ());
                match pushed {
                    Ok(()) => print_rows(&mut out, session.rows())?,
                    Err(e) => print_error(&mut out, &e)?,
                }
            }
        }
    }

    Ok(session)
}

fn search<W: Write>(
    solver: &Solver,
    session: &Session,
    out: &mut W,
    show_progress: bool,
) -> Result<(), SolverError> {
    if session.is_empty() {
        print_error(out, &SolverError::EmptySession)?;
        return Ok(());
    }

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Searching dictionary...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = solver.find_words(session);
    spinner.finish_and_clear();

    match result {
        Ok(words) => print_words(out, &words)?,
        Err(e) => print_error(out, &e)?,
    }
    Ok(())
}

fn combinations<R: BufRead, W: Write>(
    solver: &Solver,
    session: &Session,
    input: &mut R,
    out: &mut W,
) -> Result<(), SolverError> {
    if session.is_empty() {
        print_error(out, &SolverError::EmptySession)?;
        return Ok(());
    }

    let constraints = match solver.constraints(session) {
        Ok(constraints) => constraints,
        Err(e) => {
            print_error(out, &e)?;
            return Ok(());
        }
    };
    print_combination_count(out, constraints.combination_count())?;

    write!(out, "Do you want to see all combinations? (y/n): ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if answer.trim().eq_ignore_ascii_case("y") {
        // Streamed, never collected
        for word in Combinations::new(&constraints) {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}
