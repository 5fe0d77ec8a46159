//! Product-level aggregation of review verdicts.

use serde::{Deserialize, Serialize};

use crate::ReviewVerdict;

/// Per-detector summary shown on the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub name: String,
    pub description: String,
    /// Mean detector score scaled to 0-100.
    pub score: u8,
    /// Ids of reviews this detector flagged.
    pub flagged_reviews: Vec<String>,
    /// Short findings: how many reviews were flagged and the most frequent
    /// reason among them.
    pub insights: Vec<String>,
}

/// Aggregate analysis of one product's reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub product_name: String,
    /// Mean rating over all rated reviews, one decimal.
    pub original_rating: f64,
    /// Mean rating over rated reviews not flagged fake, one decimal.
    pub real_rating: f64,
    pub total_reviews: usize,
    pub fake_reviews: usize,
    /// `fake_reviews / total_reviews * 100`
    pub fake_percentage: f64,
    pub reviews: Vec<ReviewVerdict>,
    pub modules: Vec<ModuleSummary>,
}

impl AnalysisReport {
    pub fn module(&self, name: &str) -> Option<&ModuleSummary> {
        self.modules.iter().find(|m| m.name == name)
    }
}

pub const STYLOMETRY_MODULE: &str = "Language Stylometry";
pub const SENTIMENT_MODULE: &str = "Sentiment & Emotion Analysis";
pub const AI_TEXT_MODULE: &str = "GAN-Based Text Detection";

/// Build the report from finished verdicts.
pub fn summarize(url: String, product_name: String, reviews: Vec<ReviewVerdict>) -> AnalysisReport {
    let total_reviews = reviews.len();
    let fake_reviews = reviews.iter().filter(|r| r.is_fake).count();
    let fake_percentage = if total_reviews > 0 {
        fake_reviews as f64 / total_reviews as f64 * 100.0
    } else {
        0.0
    };

    let original_rating = mean_rating(reviews.iter());
    let real_rating = mean_rating(reviews.iter().filter(|r| !r.is_fake));

    let modules = vec![
        module(
            STYLOMETRY_MODULE,
            "Detects unnatural and robotic writing styles",
            &reviews,
            |r| (r.style.fake_score, r.style.is_fake, r.style.reasons.as_slice()),
        ),
        module(
            SENTIMENT_MODULE,
            "Identifies reviews lacking genuine sentiment or emotional tone",
            &reviews,
            |r| (r.sentiment.fake_score, r.sentiment.is_fake, r.sentiment.reasons.as_slice()),
        ),
        module(
            AI_TEXT_MODULE,
            "Detects AI-generated review content",
            &reviews,
            |r| (r.ai_text.ai_score, r.ai_text.is_ai_generated, r.ai_text.reasons.as_slice()),
        ),
    ];

    AnalysisReport {
        url,
        product_name,
        original_rating,
        real_rating,
        total_reviews,
        fake_reviews,
        fake_percentage,
        reviews,
        modules,
    }
}

fn module(
    name: &str,
    description: &str,
    reviews: &[ReviewVerdict],
    outcome: impl for<'a> Fn(&'a ReviewVerdict) -> (f64, bool, &'a [String]),
) -> ModuleSummary {
    let flagged: Vec<&ReviewVerdict> = reviews.iter().filter(|r| outcome(*r).1).collect();
    let flagged_reviews = flagged.iter().map(|r| r.id.clone()).collect();

    let mut insights = vec![format!("{} of {} reviews flagged", flagged.len(), reviews.len())];
    if let Some(reason) = most_common(flagged.iter().flat_map(|r| outcome(*r).2)) {
        insights.push(format!("Most common signal: {}", reason));
    }

    let score = if reviews.is_empty() {
        0
    } else {
        let mean = reviews.iter().map(|r| outcome(r).0).sum::<f64>() / reviews.len() as f64;
        (mean * 100.0).round().clamp(0.0, 100.0) as u8
    };

    ModuleSummary {
        name: name.to_string(),
        description: description.to_string(),
        score,
        flagged_reviews,
        insights,
    }
}

/// Most frequent reason; ties go to the one seen first.
fn most_common<'a>(reasons: impl Iterator<Item = &'a String>) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for reason in reasons {
        match counts.iter_mut().find(|(r, _)| *r == reason.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((reason.as_str(), 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (reason, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((reason, n)),
        })
        .map(|(reason, _)| reason)
}

fn mean_rating<'a>(reviews: impl Iterator<Item = &'a ReviewVerdict>) -> f64 {
    let (sum, count) = reviews
        .filter_map(|r| r.rating)
        .fold((0u32, 0u32), |(sum, count), rating| {
            (sum + u32::from(rating.get()), count + 1)
        });

    if count == 0 {
        return 0.0;
    }
    round_one_decimal(f64::from(sum) / f64::from(count))
}

/// Round to one decimal, ties to even, judged on the exact binary value:
/// `4.25` gives `4.2` while `4.35` (stored as `4.3499...`) gives `4.3`.
/// Decimal formatting already rounds this way.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
