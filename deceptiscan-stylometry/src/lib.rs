#![doc(
    html_logo_url = "https://raw.githubusercontent.com/deceptiscan/deceptiscan/main/assets/deceptiscan.svg",
    issue_tracker_base_url = "https://github.com/deceptiscan/deceptiscan/issues/"
)]

//! Language stylometry for deceptiscan.
//!
//! Flags reviews written in an unnatural, marketing-like style. The numeric
//! score comes from a [`StyleModel`]: either a trained [`StyleClassifier`]
//! supplied by the caller, or a seeded [`PlaceholderScorer`] until one is
//! available. Human-readable reasons come from fixed text rules and are only
//! produced for scores above the fake threshold.
//!
//! ## Usage
//!
//! ```
//! use deceptiscan_stylometry::{PlaceholderScorer, StyleAnalyzer};
//!
//! let mut analyzer = StyleAnalyzer::untrained(PlaceholderScorer::from_seed(42));
//! let result = analyzer.analyze_review("Amazing! Best thing I ever bought!!!");
//! assert!(result.fake_score >= 0.7);
//! ```

mod analyzer;
mod model;
mod placeholder;
mod reasons;

pub use analyzer::{StyleAnalyzer, StyleResult};
pub use model::{Prediction, StyleClassifier, StyleModel};
pub use placeholder::PlaceholderScorer;
pub use reasons::style_reasons;
