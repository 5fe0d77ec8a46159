#![doc(
    html_logo_url = "https://raw.githubusercontent.com/deceptiscan/deceptiscan/main/assets/deceptiscan.svg",
    issue_tracker_base_url = "https://github.com/deceptiscan/deceptiscan/issues/"
)]

//! Sentiment & emotion heuristics for deceptiscan.
//!
//! Reviews with extreme, emotionally flat sentiment, or whose text
//! contradicts their star rating, are scored as more likely to be fake.
//!
//! ## Usage
//!
//! ```
//! use deceptiscan::ReviewInput;
//! use deceptiscan_sentiment::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::default();
//! let review = ReviewInput::new("I love this amazing product", Some(5)).unwrap();
//! let result = analyzer.analyze_review(&review);
//!
//! assert_eq!(result.sentiment_score, 1.0);
//! assert!(!result.is_fake);
//! ```

mod analyzer;
mod features;
mod mismatch;
mod reasons;

pub use analyzer::{score_review, ScoreResult, SentimentAnalyzer};
pub use features::{extract_sentiment_features, SentimentFeatures};
pub use mismatch::{detect_mismatch, MismatchDirection, RatingMismatch};
pub use reasons::sentiment_reasons;
