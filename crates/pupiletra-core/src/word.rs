//! Word normalization helpers.

/// Normalizes a target word for placement and matching.
///
/// Words are compared case-insensitively by converting them to uppercase.
/// Surrounding whitespace is dropped.
///
/// # Examples
///
/// ```
/// use pupiletra_core::normalize_word;
///
/// assert_eq!(normalize_word(" gatos "), "GATOS");
/// assert_eq!(normalize_word("guiño"), "GUIÑO");
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Reverses a word character by character.
///
/// # Examples
///
/// ```
/// use pupiletra_core::reverse_word;
///
/// assert_eq!(reverse_word("NALA"), "ALAN");
/// ```
#[must_use]
pub fn reverse_word(word: &str) -> String {
    word.chars().rev().collect()
}

/// Returns the length of a word in characters.
#[must_use]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
