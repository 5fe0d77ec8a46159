//! Star rating versus text sentiment disagreement.

use deceptiscan::Rating;
use serde::{Deserialize, Serialize};

/// Sentiment below this is "negative" for mismatch purposes.
const NEGATIVE_SENTIMENT: f64 = -0.3;
/// Sentiment above this is "positive" for mismatch purposes.
const POSITIVE_SENTIMENT: f64 = 0.3;

/// Which way the rating and the text disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchDirection {
    /// 4-5 stars with negative text.
    PositiveRatingNegativeText,
    /// 1-2 stars with positive text.
    NegativeRatingPositiveText,
}

/// A detected rating/sentiment mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingMismatch {
    pub rating: Rating,
    pub direction: MismatchDirection,
    pub severity: f64,
}

impl RatingMismatch {
    /// Human-readable description naming the rating.
    pub fn describe(&self) -> String {
        match self.direction {
            MismatchDirection::PositiveRatingNegativeText => format!(
                "Positive rating ({}★) but negative sentiment in text",
                self.rating
            ),
            MismatchDirection::NegativeRatingPositiveText => format!(
                "Negative rating ({}★) but positive sentiment in text",
                self.rating
            ),
        }
    }
}

/// Check whether `rating` contradicts `sentiment_score`.
///
/// Severity is `|s + r/5|` for the high-rating case and `|s - r/5|` for the
/// low-rating case. A 3-star rating never mismatches, and neither does a
/// missing rating.
pub fn detect_mismatch(rating: Option<Rating>, sentiment_score: f64) -> Option<RatingMismatch> {
    let rating = rating?;
    let scaled = rating.fraction();

    if rating.get() >= 4 && sentiment_score < NEGATIVE_SENTIMENT {
        Some(RatingMismatch {
            rating,
            direction: MismatchDirection::PositiveRatingNegativeText,
            severity: (sentiment_score + scaled).abs(),
        })
    } else if rating.get() <= 2 && sentiment_score > POSITIVE_SENTIMENT {
        Some(RatingMismatch {
            rating,
            direction: MismatchDirection::NegativeRatingPositiveText,
            severity: (sentiment_score - scaled).abs(),
        })
    } else {
        None
    }
}
