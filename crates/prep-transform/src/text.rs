//! Text tokenization and cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of Unicode word characters (letters, digits, underscore).
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid word regex"));

/// Anything that is not an ASCII letter, ASCII digit or whitespace.
static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid punctuation regex"));

/// Splits text into lower-cased word tokens, left to right.
///
/// # Example
/// ```
/// use prep_transform::text::tokenize;
///
/// assert_eq!(tokenize("Hello, World! 2025"), vec!["hello", "world", "2025"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Replaces each punctuation character with a single space.
///
/// The character count and the casing of the text are preserved.
pub fn remove_punctuation(text: &str) -> String {
    PUNCTUATION_REGEX.replace_all(text, " ").into_owned()
}

/// Lower-cases the text and drops every whitespace-separated word found in
/// `stopwords`.
///
/// Stopwords are compared as given. Only the text is lower-cased, so an
/// upper-case stopword never matches; callers that want full case
/// insensitivity lower-case the list themselves.
pub fn remove_stopwords<S: AsRef<str>>(text: &str, stopwords: &[S]) -> String {
    let lowered = text.to_lowercase();
    lowered
        .split_whitespace()
        .filter(|word| !stopwords.iter().any(|stop| stop.as_ref() == *word))
        .collect::<Vec<_>>()
        .join(" ")
}
