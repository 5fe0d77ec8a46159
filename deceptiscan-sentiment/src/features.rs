//! Lexicon-based sentiment and emotion features.

use std::collections::BTreeMap;

use deceptiscan::{text, Emotion, Lexicon};
use serde::{Deserialize, Serialize};

/// Sentiment and emotion counts derived from a review's text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentFeatures {
    /// `(positive - negative) / (positive + negative)`, or `0.0` with no hits.
    pub sentiment_score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    /// Number of distinct emotion categories present.
    pub emotion_count: usize,
    /// Only categories with at least one hit appear here.
    pub emotions: BTreeMap<Emotion, usize>,
}

impl SentimentFeatures {
    /// `|sentiment_score|`
    pub fn intensity(&self) -> f64 {
        self.sentiment_score.abs()
    }

    /// The sole detected emotion, if exactly one category fired.
    pub fn single_emotion(&self) -> Option<Emotion> {
        if self.emotions.len() == 1 {
            self.emotions.keys().next().copied()
        } else {
            None
        }
    }
}

/// Count positive, negative and emotion tokens in `text`.
pub fn extract_sentiment_features(text: &str, lexicon: &Lexicon) -> SentimentFeatures {
    let lowered = text.to_lowercase();
    let tokens = text::word_tokens(&lowered);

    let positive_count = tokens.iter().filter(|t| lexicon.is_positive(t)).count();
    let negative_count = tokens.iter().filter(|t| lexicon.is_negative(t)).count();

    let total = positive_count + negative_count;
    let sentiment_score = if total > 0 {
        (positive_count as f64 - negative_count as f64) / total as f64
    } else {
        0.0
    };

    let emotions: BTreeMap<Emotion, usize> = lexicon
        .emotion_words()
        .filter_map(|(emotion, words)| {
            let count = tokens.iter().filter(|t| words.contains(**t)).count();
            (count > 0).then_some((emotion, count))
        })
        .collect();

    SentimentFeatures {
        sentiment_score,
        positive_count,
        negative_count,
        emotion_count: emotions.len(),
        emotions,
    }
}
