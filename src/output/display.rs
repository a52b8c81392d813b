//! Display functions for rows and command results
//!
//! Everything writes to a caller-supplied writer so the interactive loop can
//! run against stdout or an in-memory buffer.

use super::formatters::{format_positions, format_row};
use crate::commands::{CombinationsResult, SolveResult};
use crate::core::Row;
use crate::error::SolverError;
use colored::Colorize;
use std::io::{self, Write};

const TITLE: &str = r"
       ___       __         _      __            ____      ____     __
      / _ |__ __/ /____    | | /| / /__  _______/ / /__   / __/__  / /  _____ ____
     / __ / // / __/ _ \   | |/ |/ / _ \/ __/ _  / / -_) _\ \/ _ \/ / |/ / -_) __/
    /_/ |_\_,_/\__/\___/   |__/|__/\___/_/  \_,_/_/\__/ /___/\___/_/|___/\__/_/
";

/// Print the title and input rules
///
/// # Errors
/// Returns any error from the writer.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE.bright_cyan())?;
    writeln!(out, "{}", "RULES:".bright_cyan().bold())?;
    writeln!(out, "1. Use uppercase for correct letters.")?;
    writeln!(out, "2. Use lowercase for absent letters.")?;
    writeln!(out, "3. Use '?' after a letter for misplaced letters.")?;
    writeln!(out, "4. Enter '-' to remove the last row.")?;
    writeln!(out, "5. Enter 'q' to quit.")?;
    writeln!(out, "6. Press Enter on an empty line to get possible words.")?;
    writeln!(out, "7. Put '&' and press Enter to get possible combinations.")?;
    writeln!(out)
}

/// Print the session's rows, oldest first
///
/// # Errors
/// Returns any error from the writer.
pub fn print_rows<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    writeln!(out, "Current rows:")?;
    if rows.is_empty() {
        writeln!(out, "  {}", "(none)".bright_black())?;
    }
    for row in rows {
        writeln!(out, "  {}", format_row(row))?;
    }
    Ok(())
}

/// Print dictionary matches
///
/// # Errors
/// Returns any error from the writer.
pub fn print_words<W: Write>(out: &mut W, words: &[String]) -> io::Result<()> {
    let header = format!("Possible words: ({} found)", words.len());
    if words.is_empty() {
        writeln!(out, "{}", header.yellow().bold())?;
    } else {
        writeln!(out, "{}", header.green().bold())?;
    }
    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Print the number of raw combinations
///
/// # Errors
/// Returns any error from the writer.
pub fn print_combination_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Possible combinations: ({count} found)").cyan().bold()
    )
}

/// Print a failure without ending the session
///
/// # Errors
/// Returns any error from the writer.
pub fn print_error<W: Write>(out: &mut W, error: &SolverError) -> io::Result<()> {
    let message = match error {
        SolverError::InvalidFormat(_) => "Invalid row format. Please try again.".to_string(),
        SolverError::EmptySession => {
            "No rows entered yet. Please enter at least one row.".to_string()
        }
        other => other.to_string(),
    };
    writeln!(out, "{}", message.red())
}

/// Print the result of solving a fixed list of rows
///
/// # Errors
/// Returns any error from the writer.
pub fn print_solve_result<W: Write>(
    out: &mut W,
    result: &SolveResult,
    verbose: bool,
) -> io::Result<()> {
    print_rows(out, &result.rows)?;

    if verbose {
        writeln!(out, "\n{}", "Admissible letters:".bright_cyan().bold())?;
        for line in format_positions(&result.constraints) {
            writeln!(out, "  {line}")?;
        }
        writeln!(out, "  known: {}", result.constraints.known())?;
        writeln!(
            out,
            "  combinations: {}",
            result.constraints.combination_count()
        )?;
    }

    writeln!(out)?;
    print_words(out, &result.words)
}

/// Print the result of the combinations command
///
/// # Errors
/// Returns any error from the writer.
pub fn print_combinations_result<W: Write>(
    out: &mut W,
    result: &CombinationsResult,
) -> io::Result<()> {
    print_combination_count(out, result.count)?;
    if let Some(words) = &result.combinations {
        for word in words {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}
