//! Language stylometry analyzer.

use std::sync::Arc;

use deceptiscan::Lexicon;
use serde::{Deserialize, Serialize};

use crate::{style_reasons, PlaceholderScorer, StyleClassifier, StyleModel};

/// Outcome of style analysis for one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleResult {
    pub is_fake: bool,
    /// Model score in `[0, 1]`.
    pub fake_score: f64,
    /// Empty unless `fake_score > 0.7`.
    pub reasons: Vec<String>,
}

/// Detects unnatural or robotic writing styles.
#[derive(Debug)]
pub struct StyleAnalyzer {
    model: StyleModel,
    lexicon: Arc<Lexicon>,
}

impl StyleAnalyzer {
    pub fn new(model: StyleModel, lexicon: Arc<Lexicon>) -> Self {
        Self { model, lexicon }
    }

    /// Analyzer backed by the placeholder scorer and the default lexicon.
    pub fn untrained(scorer: PlaceholderScorer) -> Self {
        Self::new(StyleModel::Untrained(scorer), Lexicon::shared())
    }

    /// Analyzer backed by a trained classifier and the default lexicon.
    pub fn trained(classifier: impl StyleClassifier + 'static) -> Self {
        Self::new(StyleModel::Trained(Box::new(classifier)), Lexicon::shared())
    }

    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_trained()
    }

    pub fn analyze_review(&mut self, text: &str) -> StyleResult {
        let prediction = self.model.predict(text);
        StyleResult {
            is_fake: prediction.is_fake,
            fake_score: prediction.fake_score,
            reasons: style_reasons(text, prediction.fake_score, &self.lexicon),
        }
    }

    pub fn analyze_reviews<I>(&mut self, texts: I) -> Vec<StyleResult>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let results: Vec<_> = texts
            .into_iter()
            .map(|text| self.analyze_review(text.as_ref()))
            .collect();
        tracing::debug!(
            reviews = results.len(),
            flagged = results.iter().filter(|r| r.is_fake).count(),
            trained = self.is_trained(),
            "style analysis finished"
        );
        results
    }
}
