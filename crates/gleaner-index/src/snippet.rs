//! Query-relevant snippet selection

/// Maximum snippet length in characters, before the ellipsis
pub const SNIPPET_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Pick the sentence mentioning the most query terms.
///
/// Sentences are split on `.`, `!` and `?`. A sentence scores one point per
/// term it contains as a case-insensitive substring; the earliest sentence
/// wins ties. When nothing matches, the raw text is used as-is.
pub fn snippet(text: &str, terms: &[String]) -> String {
    let lowered_terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();

    let mut best: Option<(&str, usize)> = None;
    for sentence in text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let lowered = sentence.to_lowercase();
        let hits = lowered_terms
            .iter()
            .filter(|t| !t.is_empty() && lowered.contains(t.as_str()))
            .count();
        if best.map_or(true, |(_, top)| hits > top) {
            best = Some((sentence, hits));
        }
    }

    match best {
        Some((sentence, hits)) if hits > 0 => truncate(sentence, SNIPPET_MAX_CHARS),
        _ => truncate(text, SNIPPET_MAX_CHARS),
    }
}

/// Cut `text` to `max_chars` characters, appending an ellipsis when shortened
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
