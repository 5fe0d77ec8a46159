//! GAN-based text detection, heuristic edition.

use deceptiscan::exceeds_threshold;
use serde::{Deserialize, Serialize};

use crate::score::{has_dense_adjectives, has_repetitive_starters, has_uniform_sentence_length};
use crate::{ai_score, extract_ai_features, AiTextFeatures};

/// Outcome of AI-text analysis for one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTextResult {
    pub is_ai_generated: bool,
    pub ai_score: f64,
    pub features: AiTextFeatures,
    pub reasons: Vec<String>,
}

/// Explain an AI score. Empty unless `score` exceeds the fake threshold.
pub fn ai_reasons(features: &AiTextFeatures, score: f64) -> Vec<String> {
    let mut reasons = Vec::new();

    if !exceeds_threshold(score) {
        return reasons;
    }

    if features.has_typical_phrase {
        reasons.push("Contains phrases typical of AI-generated text".to_string());
    }
    if features.has_balanced_structure {
        reasons.push("Formulaic pros and cons structure".to_string());
    }
    if has_dense_adjectives(features) {
        reasons.push("High density of generic adjectives".to_string());
    }
    if has_repetitive_starters(features) {
        reasons.push("Repetitive sentence openings".to_string());
    }
    if has_uniform_sentence_length(features) {
        reasons.push("Uniform sentence length".to_string());
    }

    reasons
}

/// Detector for machine-generated review text.
#[derive(Debug, Clone, Default)]
pub struct AiTextDetector;

impl AiTextDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_review(&self, text: &str) -> AiTextResult {
        let features = extract_ai_features(text);
        let score = ai_score(&features);

        AiTextResult {
            is_ai_generated: exceeds_threshold(score),
            ai_score: score,
            reasons: ai_reasons(&features, score),
            features,
        }
    }

    pub fn analyze_reviews<I>(&self, texts: I) -> Vec<AiTextResult>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let results: Vec<_> = texts
            .into_iter()
            .map(|text| self.analyze_review(text.as_ref()))
            .collect();
        tracing::debug!(
            reviews = results.len(),
            flagged = results.iter().filter(|r| r.is_ai_generated).count(),
            "ai text analysis finished"
        );
        results
    }
}
