//! Tokenization helpers shared by the detectors.
//!
//! Two notions of "word" are in use and they are deliberately not unified:
//! lexicon lookups use regex word tokens, while length thresholds count
//! whitespace-separated words.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("Invalid word regex"));

/// Extract word tokens (alphanumeric runs) from already lower-cased text.
pub fn word_tokens(lowered: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(lowered).map(|m| m.as_str()).collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters (not bytes) in the text.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokens_strip_punctuation() {
        let lowered = "terrible, hate it, worst purchase ever!".to_lowercase();
        assert_eq!(
            word_tokens(&lowered),
            vec!["terrible", "hate", "it", "worst", "purchase", "ever"]
        );
    }

    #[test]
    fn test_word_tokens_split_contractions() {
        assert_eq!(word_tokens("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_word_count_uses_whitespace() {
        assert_eq!(word_count("Don't waste   your money!"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("5★"), 2);
    }
}
