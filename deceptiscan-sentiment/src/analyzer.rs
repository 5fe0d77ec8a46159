//! Heuristic fake-likelihood scoring.

use std::collections::BTreeMap;
use std::sync::Arc;

use deceptiscan::text::word_tokens;
use deceptiscan::{clamp_heuristic, exceeds_threshold, Emotion, Lexicon, ReviewInput, ScanResult};
use serde::{Deserialize, Serialize};

use crate::{detect_mismatch, extract_sentiment_features, sentiment_reasons};

const EXTREME_SENTIMENT: f64 = 0.7;
const EXTREME_SENTIMENT_WEIGHT: f64 = 0.3;
const FLAT_EMOTION_WEIGHT: f64 = 0.2;
const MAX_MISMATCH_WEIGHT: f64 = 0.4;

/// Outcome of scoring one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// `fake_score > 0.7`
    pub is_fake: bool,
    /// Accumulated heuristic score in `[0.0, 0.95]`.
    pub fake_score: f64,
    pub sentiment_score: f64,
    pub emotions: BTreeMap<Emotion, usize>,
    pub reasons: Vec<String>,
}

impl ScoreResult {
    /// Result for text with nothing to judge.
    fn blank() -> Self {
        ScoreResult {
            is_fake: false,
            fake_score: 0.0,
            sentiment_score: 0.0,
            emotions: BTreeMap::new(),
            reasons: Vec::new(),
        }
    }
}

/// Score a single review against `lexicon`.
///
/// The score accumulates from zero:
/// - `+0.3` when `|sentiment| > 0.7`
/// - `+0.2` when at most one emotion category is present
/// - `+min(0.4, severity)` when the rating contradicts the text
///
/// and is capped at `0.95`. Reasons come from a separate rule set, see
/// [`sentiment_reasons`].
///
/// Text without a single word token (empty, whitespace, bare punctuation)
/// scores `0.0` with no reasons, whatever the rating.
pub fn score_review(review: &ReviewInput, lexicon: &Lexicon) -> ScoreResult {
    if word_tokens(review.text()).is_empty() {
        tracing::trace!("no words to score");
        return ScoreResult::blank();
    }

    let features = extract_sentiment_features(review.text(), lexicon);
    let mismatch = detect_mismatch(review.rating(), features.sentiment_score);

    let mut fake_score = 0.0;

    if features.intensity() > EXTREME_SENTIMENT {
        fake_score += EXTREME_SENTIMENT_WEIGHT;
    }

    if features.emotion_count <= 1 {
        fake_score += FLAT_EMOTION_WEIGHT;
    }

    if let Some(mismatch) = &mismatch {
        fake_score += mismatch.severity.min(MAX_MISMATCH_WEIGHT);
    }

    let fake_score = clamp_heuristic(fake_score);
    let reasons = sentiment_reasons(review.text(), &features, mismatch.as_ref());

    tracing::trace!(
        fake_score,
        sentiment = features.sentiment_score,
        emotions = features.emotion_count,
        mismatch = mismatch.is_some(),
        "scored review"
    );

    ScoreResult {
        is_fake: exceeds_threshold(fake_score),
        fake_score,
        sentiment_score: features.sentiment_score,
        emotions: features.emotions,
        reasons,
    }
}

/// Sentiment & emotion analyzer bound to one lexicon.
///
/// Cheap to clone; the lexicon is shared.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyze_review(&self, review: &ReviewInput) -> ScoreResult {
        score_review(review, &self.lexicon)
    }

    /// Score reviews in order.
    pub fn analyze_reviews(&self, reviews: &[ReviewInput]) -> Vec<ScoreResult> {
        let results: Vec<_> = reviews.iter().map(|r| self.analyze_review(r)).collect();
        tracing::debug!(
            reviews = results.len(),
            flagged = results.iter().filter(|r| r.is_fake).count(),
            "sentiment analysis finished"
        );
        results
    }

    /// Validate a JSON review object and score it.
    pub fn analyze_json(&self, json: &str) -> ScanResult<ScoreResult> {
        let review = ReviewInput::from_json(json)?;
        Ok(self.analyze_review(&review))
    }
}
