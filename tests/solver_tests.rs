use auto_wordle::SolverError;
use auto_wordle::config::SolverConfig;
use auto_wordle::core::{LetterState, Row, Session};
use auto_wordle::solver::{
    LetterSet, Solver, accumulate, filter_candidates, filter_sequential, generate,
};
use auto_wordle::wordlists::loader;

#[test]
fn example_row_end_to_end() {
    let row = Row::parse("cRAn?e").unwrap();
    let states: Vec<LetterState> = row.tiles().iter().map(|t| t.state).collect();
    assert_eq!(
        states,
        vec![
            LetterState::Absent,
            LetterState::Correct,
            LetterState::Correct,
            LetterState::Misplaced,
            LetterState::Absent,
        ]
    );

    let constraints = accumulate(std::slice::from_ref(&row), 5).unwrap();
    assert_eq!(constraints.positions()[1], LetterSet::single(b'r'));
    assert_eq!(constraints.positions()[2], LetterSet::single(b'a'));
    assert!(!constraints.positions()[3].contains(b'n'));
    assert_eq!(constraints.known(), LetterSet::from_word("arn"));

    let candidates = generate(&constraints);
    assert!(candidates.contains(&"train".to_string()));

    let dictionary = loader::embedded();
    let words = filter_candidates(&candidates, &dictionary, constraints.known(), 8).unwrap();
    assert!(words.contains(&"train".to_string()));
    assert!(words.contains(&"brain".to_string()));
    assert!(!words.contains(&"crane".to_string()));
    assert!(words.iter().all(|w| constraints.admits(w)));
}

#[test]
fn embedded_dictionary_search() {
    let dictionary = loader::embedded();
    let solver = Solver::new(&dictionary, SolverConfig::default());
    let mut session = solver.new_session();
    session.push("cRAn?e").unwrap();
    session.push("gRAIN").unwrap();
    session.push("bRAIN").unwrap();

    let mut words = solver.find_words(&session).unwrap();
    words.sort();
    assert_eq!(words, vec!["drain", "train"]);
}

#[test]
fn parallel_filter_matches_sequential_on_large_input() {
    let dictionary = loader::embedded();
    let rows = vec![Row::parse("slAt?e").unwrap()];
    let constraints = accumulate(&rows, 5).unwrap();
    let candidates = generate(&constraints);
    assert!(candidates.len() > 100_000);

    let mut expected = filter_sequential(&candidates, &dictionary, constraints.known());
    expected.sort();

    for workers in [1, 3, 8, 16] {
        let mut words =
            filter_candidates(&candidates, &dictionary, constraints.known(), workers).unwrap();
        words.sort();
        assert_eq!(words, expected, "workers = {workers}");
    }
}

#[test]
fn filter_is_deterministic() {
    let dictionary = loader::embedded();
    let rows = vec![Row::parse("cRAn?e").unwrap()];
    let constraints = accumulate(&rows, 5).unwrap();
    let candidates = generate(&constraints);

    let first = filter_candidates(&candidates, &dictionary, constraints.known(), 8).unwrap();
    for _ in 0..5 {
        let again = filter_candidates(&candidates, &dictionary, constraints.known(), 8).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn undo_restores_session() {
    let mut session = Session::new(5);
    session.push("cRAn?e").unwrap();
    session.push("slAt?e").unwrap();
    let snapshot = session.clone();

    session.push("bRAIN").unwrap();
    session.undo();
    assert_eq!(session, snapshot);
}

#[test]
fn adding_rows_never_grows_candidates() {
    let dictionary = loader::embedded();
    let solver = Solver::new(&dictionary, SolverConfig::default());
    let mut session = solver.new_session();

    let mut previous = solver.combination_count(&session).unwrap();
    for raw in ["cRAn?e", "slAt?e", "bRAIN"] {
        session.push(raw).unwrap();
        let count = solver.combination_count(&session).unwrap();
        assert!(count <= previous, "{raw}: {count} > {previous}");
        previous = count;
    }
}

#[test]
fn contradictory_rows_fail() {
    let rows: Vec<Row> = ["a?b?c?d?e?", "F?ghij"]
        .iter()
        .map(|r| Row::parse(r).unwrap())
        .collect();

    assert!(matches!(
        accumulate(&rows, 5),
        Err(SolverError::ContradictoryInput {
            known: 6,
            word_len: 5
        })
    ));
}

#[test]
fn longer_words() {
    let dictionary = auto_wordle::wordlists::Dictionary::from_words(["planet", "plants", "placed"]);
    let config = SolverConfig::new(6, 4).unwrap();
    let solver = Solver::new(&dictionary, config);
    let mut session = solver.new_session();
    session.push("PLANt?s").unwrap();

    assert_eq!(solver.find_words(&session).unwrap(), vec!["planet"]);
}
