//! Dictionary loading utilities
//!
//! Loads a newline-delimited word list from disk, or falls back to the
//! embedded list when no file is available.

use super::{DICTIONARY, Dictionary};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File looked for next to the executable
pub const DEFAULT_FILE_NAME: &str = "output_words.txt";

/// Load a dictionary from a newline-delimited file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use auto_wordle::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("output_words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.lines()))
}

/// Dictionary compiled into the binary
#[must_use]
pub fn embedded() -> Dictionary {
    Dictionary::from_words(DICTIONARY)
}

/// `output_words.txt` in the executable's directory, if it exists
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let path = exe.parent()?.join(DEFAULT_FILE_NAME);
    path.is_file().then_some(path)
}

/// Load the dictionary a run should use
///
/// An explicit path wins, then the file next to the executable, then the
/// embedded list.
///
/// # Errors
///
/// Returns an I/O error if the chosen file cannot be read.
pub fn resolve(explicit: Option<&Path>) -> io::Result<Dictionary> {
    match explicit.map(Path::to_path_buf).or_else(default_path) {
        Some(path) => load_from_file(path),
        None => Ok(embedded()),
    }
}
