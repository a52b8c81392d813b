//! Parallel dictionary filter
//!
//! Candidates are dealt round-robin into one chunk per worker, so a run of
//! candidates sharing a prefix is spread over all workers. A fresh pool with
//! exactly that many threads scans the chunks and is joined before returning.
//! Results are concatenated in chunk order, which makes the output
//! deterministic.

use super::letters::LetterSet;
use crate::error::SolverError;
use crate::wordlists::Dictionary;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

/// Keep candidates that are dictionary words containing every known letter
///
/// A panic inside a worker is re-raised on the calling thread; there is no
/// partial result.
///
/// # Errors
/// Returns `InvalidConfig` if `workers` is zero and `WorkerPool` if the
/// threads cannot be spawned.
///
/// # Examples
/// ```
/// use auto_wordle::solver::{LetterSet, filter_candidates};
/// use auto_wordle::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["train", "brain", "grain"]);
/// let candidates = vec!["train".to_string(), "trxin".to_string(), "brain".to_string()];
///
/// let words = filter_candidates(&candidates, &dictionary, LetterSet::from_word("t"), 2).unwrap();
/// assert_eq!(words, vec!["train".to_string()]);
/// ```
pub fn filter_candidates(
    candidates: &[String],
    dictionary: &Dictionary,
    known: LetterSet,
    workers: usize,
) -> Result<Vec<String>, SolverError> {
    if workers == 0 {
        return Err(SolverError::InvalidConfig(
            "at least one filter worker is required".to_string(),
        ));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("wordle-filter-{i}"))
        .build()?;

    let chunks = partition(candidates, workers);
    let per_worker: Vec<Vec<String>> = pool.install(|| {
        chunks
            .par_iter()
            .map(|chunk| scan(chunk, dictionary, known))
            .collect()
    });

    Ok(per_worker.into_iter().flatten().collect())
}

/// Single-threaded filter over the unpartitioned list
#[must_use]
pub fn filter_sequential(
    candidates: &[String],
    dictionary: &Dictionary,
    known: LetterSet,
) -> Vec<String> {
    candidates
        .iter()
        .filter(|word| accepts(word, dictionary, known))
        .cloned()
        .collect()
}

/// Deal candidates into `workers` interleaved chunks
///
/// Chunk `i` holds the candidates whose index is `i` modulo `workers`.
fn partition(candidates: &[String], workers: usize) -> Vec<Vec<&str>> {
    let mut chunks = vec![Vec::with_capacity(candidates.len() / workers + 1); workers];
    for (i, word) in candidates.iter().enumerate() {
        chunks[i % workers].push(word.as_str());
    }
    chunks
}

fn scan(chunk: &[&str], dictionary: &Dictionary, known: LetterSet) -> Vec<String> {
    chunk
        .iter()
        .filter(|word| accepts(word, dictionary, known))
        .map(|&word| word.to_string())
        .collect()
}

#[inline]
fn accepts(word: &str, dictionary: &Dictionary, known: LetterSet) -> bool {
    dictionary.contains(word) && LetterSet::from_word(word).is_superset(known)
}
