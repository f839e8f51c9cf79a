//! Tokenization shared by scoring, snippets and query expansion

/// Tokens shorter than this many characters are dropped
const MIN_TOKEN_CHARS: usize = 3;

/// Lower-case `text` and split it on every run of non-alphanumeric characters.
///
/// Tokens of two characters or fewer are discarded. Documents and queries go
/// through the same function so scoring compares like with like.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(|t| t.to_string())
        .collect()
}

/// Split a raw query into its significant words, keeping their original case.
///
/// Words are whitespace-separated with surrounding punctuation stripped.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
        .map(|w| w.to_string())
        .collect()
}
