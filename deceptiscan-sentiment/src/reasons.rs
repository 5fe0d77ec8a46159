//! Human-readable reasons for a sentiment-based fake flag.
//!
//! These rules run independently of the numeric score. A review can score
//! high with no reasons, or carry reasons while scoring low.

use deceptiscan::text;

use crate::{RatingMismatch, SentimentFeatures};

/// Extreme sentiment only counts as suspicious in reviews shorter than this.
const SHORT_REVIEW_WORDS: usize = 30;
/// Emotional range is only judged for reviews longer than this.
const LONG_REVIEW_WORDS: usize = 50;
const EXTREME_SENTIMENT: f64 = 0.7;

/// Build the ordered list of sentiment reasons for a review.
pub fn sentiment_reasons(
    text: &str,
    features: &SentimentFeatures,
    mismatch: Option<&RatingMismatch>,
) -> Vec<String> {
    let mut reasons = Vec::new();
    let words = text::word_count(text);

    if features.intensity() > EXTREME_SENTIMENT && words < SHORT_REVIEW_WORDS {
        if features.sentiment_score > 0.0 {
            reasons.push("Extreme positive sentiment without supporting details".to_string());
        } else {
            reasons.push("Extreme negative sentiment without supporting details".to_string());
        }
    }

    if let Some(mismatch) = mismatch {
        reasons.push(mismatch.describe());
    }

    if words > LONG_REVIEW_WORDS {
        if features.emotion_count == 0 {
            reasons.push("No emotional language in a long review".to_string());
        } else if let Some(emotion) = features.single_emotion() {
            reasons.push(format!("Limited emotional range (only {})", emotion));
        }
    }

    reasons
}
