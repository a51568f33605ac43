//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or from the embedded
//! constant.

use super::Dictionary;
use super::embedded::WORDS;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a newline-delimited file
///
/// Invalid entries are skipped rather than reported.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use jotto_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("scrabble_words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_lines(content.lines()))
}

/// The dictionary compiled into the binary
#[must_use]
pub fn embedded() -> Dictionary {
    Dictionary::from_lines(WORDS.iter().copied())
}
