//! Accent-insensitive text normalization for keyword matching.

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks removed after canonical decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Decomposes `text`, drops combining marks and lowercases the result.
fn fold(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
}

const fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Folds `text` and collapses everything outside `[a-z0-9]` into single
/// spaces.
#[must_use]
pub fn normalize_phrase(text: &str) -> String {
    let spaced: String = fold(text)
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Folds a department name into its lookup key, dropping every character
/// outside `[a-z0-9]` (`"T.I"` becomes `"ti"`).
#[must_use]
pub fn department_key(name: &str) -> String {
    fold(name).filter(|c| is_kept(*c)).collect()
}

/// Ticket text prepared for phrase and exact-word matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    flat: String,
    tokens: HashSet<String>,
}

impl NormalizedText {
    /// Normalizes `text` into its flattened form and token set.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let flat = normalize_phrase(text);
        let tokens = flat.split_whitespace().map(str::to_owned).collect();
        Self { flat, tokens }
    }

    /// Returns the flattened, single-spaced text.
    #[must_use]
    pub fn flat(&self) -> &str {
        &self.flat
    }

    /// Returns `true` when the flattened text contains `phrase`.
    #[must_use]
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.flat.contains(phrase)
    }

    /// Returns `true` when `word` is one of the whitespace-delimited tokens.
    #[must_use]
    pub fn has_token(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }

    /// Returns `true` when the text has no token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
