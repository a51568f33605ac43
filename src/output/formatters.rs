//! Formatting utilities for terminal output

use crate::core::{LetterSet, Word};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of `total` a remaining count keeps
#[must_use]
pub fn remaining_bar(remaining: usize, total: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, total as f64, width)
}

/// Uppercase letters separated by spaces, or `-` for the empty set
#[must_use]
pub fn format_letters(letters: LetterSet) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|letter| char::from(letter.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay words out in rows of `per_row`
#[must_use]
pub fn word_rows(words: &[&Word], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|word| word.text())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
