#![doc(
    html_logo_url = "https://raw.githubusercontent.com/deceptiscan/deceptiscan/main/assets/deceptiscan.svg",
    issue_tracker_base_url = "https://github.com/deceptiscan/deceptiscan/issues/"
)]

//! Heuristics for machine-generated reviews.
//!
//! Extracts surface features that language-model output tends to share
//! (stock phrases, "pros and cons" framing, dense generic adjectives,
//! repetitive sentence openings, uniform sentence length) and folds them
//! into a score in `[0, 1]`.

mod detector;
mod features;
mod score;

pub use detector::{ai_reasons, AiTextDetector, AiTextResult};
pub use features::{extract_ai_features, sentences, AiTextFeatures};
pub use score::ai_score;
