/// Expand a token sequence into unigram and bigram features.
///
/// Unigrams come first in token order, then every adjacent pair joined
/// by a single space. Duplicates are kept: the output is a feature
/// multiset, counted later by `TermFrequency`. Zero or one token means
/// no bigrams.
pub fn ngrams(tokens: &[String]) -> Vec<String> {
    let mut features = Vec::with_capacity(tokens.len().saturating_mul(2));
    for token in tokens {
        features.push(token.clone());
    }
    for pair in tokens.windows(2) {
        features.push(format!("{} {}", pair[0], pair[1]));
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_and_single_token() {
        assert!(ngrams(&[]).is_empty());
        assert_eq!(ngrams(&toks(&["track"])), vec!["track"]);
    }

    #[test]
    fn unigrams_then_bigrams_in_order() {
        assert_eq!(
            ngrams(&toks(&["track", "order", "status"])),
            vec!["track", "order", "status", "track order", "order status"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(ngrams(&toks(&["go", "go"])), vec!["go", "go", "go go"]);
    }
}
