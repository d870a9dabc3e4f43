use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words dropped during normalization.
/// Articles, pronouns, prepositions, conjunctions, auxiliaries and
/// wh-words; everything else counts as content.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "is", "am", "are", "was", "were", "be", "been", "i", "you", "he",
        "she", "it", "we", "they", "my", "your", "his", "her", "its", "our", "their", "on",
        "in", "at", "to", "for", "of", "and", "or", "but", "how", "what", "where", "when",
    ]
    .into_iter()
    .collect()
});

/// Normalize raw text into an ordered token sequence.
///
/// Lowercases the input, turns every character that is not an ASCII
/// letter or digit into a space, splits on whitespace runs and drops
/// stopwords. Pure and deterministic; empty or all-stopword input
/// yields an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(*token))
        .map(|token| token.to_string())
        .collect()
}
