//! Validated review input.
//!
//! A [`ReviewInput`] can only be built through constructors that check the
//! star rating, so scoring code never has to re-validate it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ScanError, ScanResult};

/// A star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw rating value.
    pub fn new(rating: i64) -> ScanResult<Self> {
        if rating < i64::from(Self::MIN) || rating > i64::from(Self::MAX) {
            return Err(ScanError::InvalidRating { rating });
        }
        Ok(Self(rating as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The rating scaled into `0.2..=1.0`.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl TryFrom<i64> for Rating {
    type Error = ScanError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review text with an optional star rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    text: String,
    #[serde(default)]
    rating: Option<Rating>,
}

impl ReviewInput {
    /// Build a review, rejecting ratings outside 1-5.
    pub fn new(text: impl Into<String>, rating: Option<i64>) -> ScanResult<Self> {
        let rating = rating.map(Rating::new).transpose()?;
        Ok(Self {
            text: text.into(),
            rating,
        })
    }

    /// Build an unrated review. Always valid.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rating: None,
        }
    }

    /// Build a review from an already validated rating.
    pub fn with_rating(text: impl Into<String>, rating: Rating) -> Self {
        Self {
            text: text.into(),
            rating: Some(rating),
        }
    }

    /// Parse a JSON object of the form `{"text": "...", "rating": 4}`.
    ///
    /// A non-string `text` or an out-of-range `rating` is rejected here,
    /// before any feature extraction happens.
    pub fn from_json(json: &str) -> ScanResult<Self> {
        serde_json::from_str(json).map_err(|e| ScanError::InvalidInput {
            message: e.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-3).is_err());
        assert_eq!(Rating::new(1).unwrap().get(), 1);
        assert_eq!(Rating::new(5).unwrap().get(), 5);
    }

    #[test]
    fn test_rating_fraction() {
        assert_eq!(Rating::new(5).unwrap().fraction(), 1.0);
        assert!((Rating::new(1).unwrap().fraction() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_new_rejects_bad_rating() {
        let err = ReviewInput::new("fine", Some(7)).unwrap_err();
        assert!(matches!(err, ScanError::InvalidRating { rating: 7 }));
        assert_eq!(
            err.to_string(),
            "invalid rating 7: expected an integer from 1 to 5"
        );
    }

    #[test]
    fn test_from_json_accepts_missing_rating() {
        let review = ReviewInput::from_json(r#"{"text": "Works fine"}"#).unwrap();
        assert_eq!(review.text(), "Works fine");
        assert_eq!(review.rating(), None);

        let review = ReviewInput::from_json(r#"{"text": "Works fine", "rating": null}"#).unwrap();
        assert_eq!(review.rating(), None);
    }

    #[test]
    fn test_from_json_rejects_non_string_text() {
        let err = ReviewInput::from_json(r#"{"text": 42, "rating": 3}"#).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput { .. }));
    }

    #[test]
    fn test_from_json_rejects_out_of_range_rating() {
        let err = ReviewInput::from_json(r#"{"text": "ok", "rating": 9}"#).unwrap_err();
        match err {
            ScanError::InvalidInput { message } => assert!(message.contains("invalid rating 9")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rating_serializes_as_number() {
        let review = ReviewInput::new("ok", Some(4)).unwrap();
        let json = serde_json::to_string(&review).unwrap();
        assert_eq!(json, r#"{"text":"ok","rating":4}"#);
    }
}
