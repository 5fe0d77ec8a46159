//! Review records as supplied by a caller.

use deceptiscan::{Rating, ReviewInput, ScanError, ScanResult};
use serde::{Deserialize, Serialize};

/// A review plus the metadata shown alongside it in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub author: String,
    /// Posting date as given by the source, usually `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub verified: bool,
}

impl ReviewRecord {
    /// Record with only an id, text and rating.
    pub fn new(id: impl Into<String>, text: impl Into<String>, rating: Option<i64>) -> ScanResult<Self> {
        Ok(Self {
            id: id.into(),
            text: text.into(),
            rating: rating.map(Rating::new).transpose()?,
            author: String::new(),
            date: String::new(),
            verified: false,
        })
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn input(&self) -> ReviewInput {
        match self.rating {
            Some(rating) => ReviewInput::with_rating(self.text.clone(), rating),
            None => ReviewInput::text_only(self.text.clone()),
        }
    }
}

/// Parse a JSON array of review records, rejecting any malformed entry.
pub fn records_from_json(json: &str) -> ScanResult<Vec<ReviewRecord>> {
    serde_json::from_str(json).map_err(|e| ScanError::InvalidInput {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_from_json() {
        let records = records_from_json(
            r#"[
                {"id": "r1", "text": "Great", "rating": 5, "author": "JohnDoe123", "date": "2023-12-15", "verified": true},
                {"id": "r2", "text": "Meh"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rating.map(|r| r.get()), Some(5));
        assert!(records[0].verified);
        assert_eq!(records[1].rating, None);
        assert_eq!(records[1].author, "");
    }

    #[test]
    fn test_bad_rating_rejected() {
        let err = records_from_json(r#"[{"id": "r1", "text": "Great", "rating": 11}]"#).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput { .. }));
    }

    #[test]
    fn test_non_string_text_rejected() {
        let err = records_from_json(r#"[{"id": "r1", "text": 5}]"#).unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput { .. }));
    }

    #[test]
    fn test_input_carries_rating() {
        let record = ReviewRecord::new("r1", "ok", Some(3)).unwrap();
        assert_eq!(record.input(), ReviewInput::new("ok", Some(3)).unwrap());
        assert!(ReviewRecord::new("r1", "ok", Some(0)).is_err());
    }
}
