//! Surface features common in machine-generated reviews.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stock phrases language models reach for in reviews.
const TYPICAL_PHRASES: &[&str] = &[
    "i would recommend",
    "i highly recommend",
    "in conclusion",
    "overall experience",
    "in summary",
    "in my opinion",
];

/// Generic adjectives, counted as substrings.
const GENERIC_ADJECTIVES: &[&str] = &[
    "great",
    "good",
    "amazing",
    "excellent",
    "wonderful",
    "fantastic",
    "awesome",
];

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence regex"));

/// "pros ... cons" and its synonyms within a short window.
static BALANCED_STRUCTURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(pros|advantages|benefits).{1,50}(cons|disadvantages|drawbacks)\b")
        .expect("Invalid balanced structure regex")
});

/// Features extracted from one review.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AiTextFeatures {
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Mean word length in characters.
    pub avg_word_len: f64,
    pub sentence_count: usize,
    /// Words per sentence.
    pub avg_sent_len: f64,
    pub has_typical_phrase: bool,
    pub has_balanced_structure: bool,
    /// Generic adjective occurrences per word.
    pub adj_ratio: f64,
    /// Distinct sentence-opening words per sentence.
    pub unique_starters_ratio: f64,
}

/// Split into trimmed, non-empty sentences on runs of `.`, `!` and `?`.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn extract_ai_features(text: &str) -> AiTextFeatures {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let word_count = words.len();

    let avg_word_len = if word_count > 0 {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
    } else {
        0.0
    };

    let sentences = sentences(text);
    let sentence_count = sentences.len();
    let avg_sent_len = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let has_typical_phrase = TYPICAL_PHRASES.iter().any(|p| lowered.contains(p));
    let has_balanced_structure = BALANCED_STRUCTURE.is_match(&lowered);

    let adj_count: usize = GENERIC_ADJECTIVES
        .iter()
        .map(|adj| lowered.matches(adj).count())
        .sum();
    let adj_ratio = if word_count > 0 {
        adj_count as f64 / word_count as f64
    } else {
        0.0
    };

    let starters: HashSet<String> = sentences
        .iter()
        .filter_map(|s| s.split_whitespace().next())
        .map(str::to_lowercase)
        .collect();
    let unique_starters_ratio = if sentence_count > 0 {
        starters.len() as f64 / sentence_count as f64
    } else {
        0.0
    };

    AiTextFeatures {
        word_count,
        avg_word_len,
        sentence_count,
        avg_sent_len,
        has_typical_phrase,
        has_balanced_structure,
        adj_ratio,
        unique_starters_ratio,
    }
}
