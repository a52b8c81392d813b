use auto_wordle::commands::run_interactive;
use auto_wordle::config::SolverConfig;
use auto_wordle::solver::Solver;
use auto_wordle::wordlists::Dictionary;
use std::io::Cursor;

fn dictionary() -> Dictionary {
    Dictionary::from_words(["train", "brain", "drain", "grain", "crane", "slate"])
}

/// Feed `script` to the loop and return (final row count, output text)
fn run(script: &str) -> (usize, String) {
    let dictionary = dictionary();
    let solver = Solver::new(&dictionary, SolverConfig::default());
    let mut out = Vec::new();

    let session = run_interactive(&solver, Cursor::new(script), &mut out, false).unwrap();
    (session.len(), String::from_utf8(out).unwrap())
}

#[test]
fn search_prints_matches() {
    let (rows, out) = run("cRAn?e\ngRAIN\n\nq\n");

    assert_eq!(rows, 2);
    assert!(out.contains("Possible words: (3 found)"));
    for word in ["brain", "drain", "train"] {
        assert!(out.contains(&format!("{word}\n")), "missing {word}");
    }
}

#[test]
fn empty_search_is_refused() {
    let (rows, out) = run("\nq\n");
    assert_eq!(rows, 0);
    assert!(out.contains("No rows entered yet"));
    assert!(!out.contains("Possible words"));
}

#[test]
fn invalid_row_is_rejected_and_loop_continues() {
    let (rows, out) = run("cr4ne\ncRAn?e\nq\n");
    assert_eq!(rows, 1);
    assert!(out.contains("Invalid row format"));
    assert!(out.contains("Current rows:"));
}

#[test]
fn wrong_length_row_is_rejected() {
    let (rows, out) = run("planet\nq\n");
    assert_eq!(rows, 0);
    assert!(out.contains("session expects 5"));
}

#[test]
fn undo_removes_last_row() {
    let (rows, _) = run("cRAn?e\ngRAIN\n-\nq\n");
    assert_eq!(rows, 1);

    let (rows, out) = run("-\nq\n");
    assert_eq!(rows, 0);
    assert!(out.contains("Nothing to undo"));
}

#[test]
fn combinations_ask_before_listing() {
    let (_, out) = run("TRAIn\n&\nn\nq\n");
    assert!(out.contains("Possible combinations: (25 found)"));
    assert!(out.contains("(y/n)"));
    assert!(!out.contains("trait\n"));

    let (_, out) = run("TRAIn\n&\ny\nq\n");
    assert!(out.contains("traia\n"));
    assert!(out.contains("trait\n"));
    assert!(out.contains("traiz\n"));
}

#[test]
fn combinations_on_empty_session_refused() {
    let (_, out) = run("&\nq\n");
    assert!(out.contains("No rows entered yet"));
    assert!(!out.contains("(y/n)"));
}

#[test]
fn contradiction_is_reported_not_fatal() {
    let (rows, out) = run("a?b?c?d?e?\nf?ghij\n\n-\n\nq\n");

    assert_eq!(rows, 1);
    assert!(out.contains("too many letters"));
    // After undo the search runs normally
    assert!(out.contains("Possible words: (0 found)"));
}

#[test]
fn end_of_input_ends_session() {
    let (rows, _) = run("cRAn?e\n");
    assert_eq!(rows, 1);
}
