//! Style reasons: superlatives, vagueness and punctuation.

use deceptiscan::{exceeds_threshold, text, Lexicon};

const MIN_SUPERLATIVES: usize = 2;
/// Superlative stacking only matters in reviews shorter than this.
const SUPERLATIVE_REVIEW_WORDS: usize = 50;
/// Reviews shorter than this are "too short" outright.
const MIN_DETAILED_WORDS: usize = 20;
const MAX_EXCLAMATIONS: usize = 2;

/// Explain a style score.
///
/// Returns nothing unless `style_score` exceeds the fake threshold; the text
/// is not even inspected below it. Matching is substring-based on the
/// lower-cased text.
pub fn style_reasons(text: &str, style_score: f64, lexicon: &Lexicon) -> Vec<String> {
    let mut reasons = Vec::new();

    if !exceeds_threshold(style_score) {
        return reasons;
    }

    let lowered = text.to_lowercase();
    let words = text::word_count(text);

    let superlatives = lexicon
        .superlatives
        .iter()
        .filter(|s| lowered.contains(s.as_str()))
        .count();
    if superlatives >= MIN_SUPERLATIVES && words < SUPERLATIVE_REVIEW_WORDS {
        reasons.push("Excessive superlatives".to_string());
    }

    if words < MIN_DETAILED_WORDS {
        reasons.push("Too short, lacks details".to_string());
    } else if lowered.contains("product")
        && !lexicon
            .specificity_terms
            .iter()
            .any(|term| lowered.contains(term.as_str()))
    {
        reasons.push("Generic praise without specific details".to_string());
    }

    if text.matches('!').count() > MAX_EXCLAMATIONS {
        reasons.push("Excessive exclamation marks".to_string());
    }

    reasons
}
