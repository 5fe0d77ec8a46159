#![doc(
    html_logo_url = "https://raw.githubusercontent.com/deceptiscan/deceptiscan/main/assets/deceptiscan.svg",
    issue_tracker_base_url = "https://github.com/deceptiscan/deceptiscan/issues/"
)]

//! Core types for heuristic fake-review detection.
//!
//! This crate holds what every detector shares: validated review input,
//! the word lists, tokenization, thresholds, errors, and configuration.
//! The detectors themselves live in sibling crates:
//!
//! - `deceptiscan-sentiment` - sentiment, emotion and rating-mismatch scoring
//! - `deceptiscan-stylometry` - writing-style reasons and the style model
//! - `deceptiscan-ai-text` - features typical of machine-generated reviews
//! - `deceptiscan-report` - runs the detectors and aggregates a product report
//!
//! ## Usage
//!
//! ```
//! use deceptiscan::{Lexicon, ReviewInput};
//!
//! let lexicon = Lexicon::shared();
//! let review = ReviewInput::new("Great value, battery lasts all day", Some(4)).unwrap();
//! assert!(lexicon.is_positive("great"));
//! assert_eq!(review.rating().map(|r| r.get()), Some(4));
//! ```

mod config;
mod errors;
mod lexicon;
mod review;
pub mod text;
mod verdict;

pub use config::ScanConfig;
pub use errors::{ScanError, ScanResult};
pub use lexicon::{Emotion, Lexicon};
pub use review::{Rating, ReviewInput};
pub use verdict::{clamp_heuristic, exceeds_threshold, FAKE_THRESHOLD, MAX_HEURISTIC_SCORE};
