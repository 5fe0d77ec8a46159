//! Heuristic AI-generation score.

use crate::AiTextFeatures;

const SINGLE_SENTENCE_WEIGHT: f64 = 0.1;
const MANY_SENTENCES: usize = 10;
const MANY_SENTENCES_WEIGHT: f64 = 0.2;
const UNIFORM_LENGTH_RANGE: (f64, f64) = (15.0, 25.0);
const UNIFORM_LENGTH_WEIGHT: f64 = 0.15;
const TYPICAL_PHRASE_WEIGHT: f64 = 0.2;
const BALANCED_STRUCTURE_WEIGHT: f64 = 0.15;
const ADJECTIVE_DENSITY: f64 = 0.1;
const ADJECTIVE_DENSITY_WEIGHT: f64 = 0.2;
/// Starter repetition is only judged with at least this many sentences.
const MIN_SENTENCES_FOR_STARTERS: usize = 3;
const REPETITIVE_STARTERS: f64 = 0.5;
const REPETITIVE_STARTERS_WEIGHT: f64 = 0.15;

pub(crate) fn has_uniform_sentence_length(features: &AiTextFeatures) -> bool {
    let (low, high) = UNIFORM_LENGTH_RANGE;
    low < features.avg_sent_len && features.avg_sent_len < high
}

pub(crate) fn has_dense_adjectives(features: &AiTextFeatures) -> bool {
    features.adj_ratio > ADJECTIVE_DENSITY
}

pub(crate) fn has_repetitive_starters(features: &AiTextFeatures) -> bool {
    features.sentence_count >= MIN_SENTENCES_FOR_STARTERS
        && features.unique_starters_ratio < REPETITIVE_STARTERS
}

/// Combine features into a likelihood in `[0, 1]`.
pub fn ai_score(features: &AiTextFeatures) -> f64 {
    let mut score = 0.0;

    if features.sentence_count == 1 {
        score += SINGLE_SENTENCE_WEIGHT;
    } else if features.sentence_count > MANY_SENTENCES {
        score += MANY_SENTENCES_WEIGHT;
    }

    if has_uniform_sentence_length(features) {
        score += UNIFORM_LENGTH_WEIGHT;
    }

    if features.has_typical_phrase {
        score += TYPICAL_PHRASE_WEIGHT;
    }

    if features.has_balanced_structure {
        score += BALANCED_STRUCTURE_WEIGHT;
    }

    if has_dense_adjectives(features) {
        score += ADJECTIVE_DENSITY_WEIGHT;
    }

    if has_repetitive_starters(features) {
        score += REPETITIVE_STARTERS_WEIGHT;
    }

    f64::clamp(score, 0.0, 1.0)
}
