//! Style model: a trained classifier, or a placeholder until one exists.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PlaceholderScorer;

/// Output of a trained style classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability that the text is fake, in `[0, 1]`.
    pub fake_score: f64,
    /// The classifier's own binary decision.
    pub is_fake: bool,
}

/// A binary fake/genuine classifier over review text.
///
/// Implemented outside this crate by whatever model serving is available.
pub trait StyleClassifier: Send + Sync {
    fn predict(&self, text: &str) -> Prediction;

    /// Identifier used in logs.
    fn name(&self) -> &str {
        "style-classifier"
    }
}

/// Which scoring path a [`crate::StyleAnalyzer`] uses.
///
/// Chosen once at construction.
pub enum StyleModel {
    Untrained(PlaceholderScorer),
    Trained(Box<dyn StyleClassifier>),
}

impl StyleModel {
    pub fn is_trained(&self) -> bool {
        matches!(self, StyleModel::Trained(_))
    }

    /// Score `text`. Untrained models decide `is_fake` by threshold, trained
    /// ones report their own decision.
    pub(crate) fn predict(&mut self, text: &str) -> Prediction {
        match self {
            StyleModel::Untrained(scorer) => {
                let fake_score = scorer.score(text);
                Prediction {
                    fake_score,
                    is_fake: deceptiscan::exceeds_threshold(fake_score),
                }
            }
            StyleModel::Trained(classifier) => {
                let prediction = classifier.predict(text);
                tracing::trace!(
                    classifier = classifier.name(),
                    fake_score = prediction.fake_score,
                    "classifier prediction"
                );
                Prediction {
                    fake_score: prediction.fake_score.clamp(0.0, 1.0),
                    is_fake: prediction.is_fake,
                }
            }
        }
    }
}

impl fmt::Debug for StyleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleModel::Untrained(scorer) => f.debug_tuple("Untrained").field(scorer).finish(),
            StyleModel::Trained(classifier) => {
                f.debug_tuple("Trained").field(&classifier.name()).finish()
            }
        }
    }
}
