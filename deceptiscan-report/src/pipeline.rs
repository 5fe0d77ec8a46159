//! Runs every detector over each review.

use std::sync::Arc;

use deceptiscan::{Rating, ScanConfig, ScanResult};
use deceptiscan_ai_text::{AiTextDetector, AiTextResult};
use deceptiscan_sentiment::{ScoreResult, SentimentAnalyzer};
use deceptiscan_stylometry::{PlaceholderScorer, StyleAnalyzer, StyleResult};
use serde::{Deserialize, Serialize};

use crate::{summarize, AnalysisReport, ReviewRecord};

/// Per-review outcome across all detectors.
///
/// `is_fake` and `fake_score` are the heuristic sentiment scorer's verdict;
/// the other detectors contribute reasons and module statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewVerdict {
    pub id: String,
    pub text: String,
    pub rating: Option<Rating>,
    pub author: String,
    pub date: String,
    pub verified: bool,
    pub is_fake: bool,
    pub fake_score: f64,
    /// Sentiment, then style, then AI-text reasons.
    pub fake_reasons: Vec<String>,
    pub sentiment: ScoreResult,
    pub style: StyleResult,
    pub ai_text: AiTextResult,
}

/// The detector set used to build a report.
#[derive(Debug)]
pub struct ReviewPipeline {
    sentiment: SentimentAnalyzer,
    style: StyleAnalyzer,
    ai_text: AiTextDetector,
}

impl ReviewPipeline {
    pub fn new(sentiment: SentimentAnalyzer, style: StyleAnalyzer, ai_text: AiTextDetector) -> Self {
        Self {
            sentiment,
            style,
            ai_text,
        }
    }

    /// Untrained pipeline configured from `config`: its lexicon for every
    /// detector and its seed (or entropy) for the placeholder style scorer.
    pub fn from_config(config: &ScanConfig) -> ScanResult<Self> {
        let lexicon = Arc::new(config.lexicon()?);
        let scorer = match config.seed {
            Some(seed) => PlaceholderScorer::from_seed(seed),
            None => PlaceholderScorer::from_entropy(),
        };

        Ok(Self::new(
            SentimentAnalyzer::new(Arc::clone(&lexicon)),
            StyleAnalyzer::untrained(scorer).with_lexicon(lexicon),
            AiTextDetector::new(),
        ))
    }

    pub fn analyze(&mut self, record: &ReviewRecord) -> ReviewVerdict {
        let sentiment = self.sentiment.analyze_review(&record.input());
        let style = self.style.analyze_review(&record.text);
        let ai_text = self.ai_text.analyze_review(&record.text);

        let fake_reasons = sentiment
            .reasons
            .iter()
            .chain(&style.reasons)
            .chain(&ai_text.reasons)
            .cloned()
            .collect();

        ReviewVerdict {
            id: record.id.clone(),
            text: record.text.clone(),
            rating: record.rating,
            author: record.author.clone(),
            date: record.date.clone(),
            verified: record.verified,
            is_fake: sentiment.is_fake,
            fake_score: sentiment.fake_score,
            fake_reasons,
            sentiment,
            style,
            ai_text,
        }
    }

    /// Analyze every record and aggregate the product report.
    pub fn report(
        &mut self,
        url: impl Into<String>,
        product_name: impl Into<String>,
        records: &[ReviewRecord],
    ) -> AnalysisReport {
        let verdicts: Vec<_> = records.iter().map(|r| self.analyze(r)).collect();
        let report = summarize(url.into(), product_name.into(), verdicts);

        tracing::info!(
            total = report.total_reviews,
            fake = report.fake_reviews,
            original_rating = report.original_rating,
            real_rating = report.real_rating,
            "analysis report built"
        );
        report
    }
}
