//! Auto Wordle Solver
//!
//! Narrows the possible answers of a Wordle-style puzzle from annotated guess
//! rows, then filters the remaining letter combinations against a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use auto_wordle::config::SolverConfig;
//! use auto_wordle::solver::Solver;
//! use auto_wordle::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["train", "brain", "crane"]);
//! let solver = Solver::new(&dictionary, SolverConfig::default());
//!
//! // R and A correct, N misplaced, C and E absent
//! let mut session = solver.new_session();
//! session.push("cRAn?e").unwrap();
//!
//! let mut words = solver.find_words(&session).unwrap();
//! words.sort();
//! assert_eq!(words, vec!["brain", "train"]);
//! ```

// Settings and error type
pub mod config;
pub mod error;

// Feedback rows and sessions
pub mod core;

// Constraint folding, generation and filtering
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
