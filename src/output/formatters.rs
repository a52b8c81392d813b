//! Formatting utilities for terminal output

use crate::core::{LetterState, Row, Tile};
use crate::solver::Constraints;
use colored::{ColoredString, Colorize};

/// Render a row with one color per feedback state
///
/// Correct letters are green uppercase, misplaced yellow, absent red. When
/// colors are disabled the row falls back to annotation notation so
/// misplaced letters keep their `?`.
#[must_use]
pub fn format_row(row: &Row) -> String {
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        return row.to_string();
    }
    row.tiles().iter().map(|&tile| colored_tile(tile).to_string()).collect()
}

fn colored_tile(tile: Tile) -> ColoredString {
    let letter = char::from(tile.letter);
    match tile.state {
        LetterState::Correct => letter.to_ascii_uppercase().to_string().green().bold(),
        LetterState::Misplaced => letter.to_string().yellow(),
        LetterState::Absent => letter.to_string().red(),
    }
}

/// One line per position listing its admissible letters, e.g. `3: abdf...`
#[must_use]
pub fn format_positions(constraints: &Constraints) -> Vec<String> {
    constraints
        .positions()
        .iter()
        .enumerate()
        .map(|(i, set)| {
            if set.is_empty() {
                format!("{}: (none)", i + 1)
            } else {
                format!("{}: {set}", i + 1)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::accumulate;

    #[test]
    fn format_row_keeps_letters() {
        let row = Row::parse("cRAn?e").unwrap();
        let text = format_row(&row);

        // Colored or not, every letter is rendered in order
        for letter in ["c", "R", "A", "n", "e"] {
            assert!(text.contains(letter), "missing {letter} in {text}");
        }
    }

    #[test]
    fn positions_listed_one_based() {
        let rows = vec![Row::parse("TRAIn").unwrap()];
        let constraints = accumulate(&rows, 5).unwrap();
        let lines = format_positions(&constraints);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1: t");
        assert_eq!(lines[3], "4: i");
        assert_eq!(lines[4], "5: abcdefghijklmopqrstuvwxyz");
    }

    #[test]
    fn empty_position_is_marked() {
        let rows: Vec<Row> = ["abcde", "fghij", "klmno", "pqrst", "uvwxy", "zZZZZ"]
            .iter()
            .map(|r| Row::parse(r).unwrap())
            .collect();
        let constraints = accumulate(&rows, 5).unwrap();
        assert_eq!(format_positions(&constraints)[0], "1: (none)");
    }
}
