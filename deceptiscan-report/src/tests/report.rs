use deceptiscan::ScanConfig;
use deceptiscan_ai_text::AiTextDetector;
use deceptiscan_sentiment::SentimentAnalyzer;
use deceptiscan_stylometry::{Prediction, StyleAnalyzer, StyleClassifier};

use crate::{
    records_from_json, AnalysisReport, ReviewPipeline, ReviewRecord, AI_TEXT_MODULE,
    SENTIMENT_MODULE, STYLOMETRY_MODULE,
};

/// Flags anything mentioning "best".
struct KeywordClassifier;

impl StyleClassifier for KeywordClassifier {
    fn predict(&self, text: &str) -> Prediction {
        let is_fake = text.to_lowercase().contains("best");
        Prediction {
            fake_score: if is_fake { 0.9 } else { 0.1 },
            is_fake,
        }
    }
}

const FORMULAIC: &str = "I would recommend this great product to anyone who wants a good and amazing gadget for the whole family at home. I think the pros of this excellent device clearly outweigh the cons for most good and great people. I found the whole overall experience to be wonderful and fantastic from start to finish with no real issues.";

fn records() -> Vec<ReviewRecord> {
    vec![
        ReviewRecord::new("a", "Great, love it, best ever", Some(1)).unwrap(),
        ReviewRecord::new("b", "I love this amazing product", Some(5))
            .unwrap()
            .with_author("JohnDoe123")
            .verified(true),
        ReviewRecord::new("c", "Works fine, battery lasts.", Some(4)).unwrap(),
        ReviewRecord::new("d", "Perfect. Excellent. Awesome.", Some(2)).unwrap(),
        ReviewRecord::new("e", "Happy and surprised it works", None).unwrap(),
        ReviewRecord::new("f", FORMULAIC, Some(5)).unwrap(),
    ]
}

fn keyword_pipeline() -> ReviewPipeline {
    ReviewPipeline::new(
        SentimentAnalyzer::default(),
        StyleAnalyzer::trained(KeywordClassifier),
        AiTextDetector::new(),
    )
}

fn build_report() -> AnalysisReport {
    keyword_pipeline().report("https://www.example.com/product/123", "Smart Home Assistant Pro", &records())
}

#[test]
fn headline_numbers() {
    let report = build_report();

    assert_eq!(report.total_reviews, 6);
    assert_eq!(report.fake_reviews, 2);
    assert!((report.fake_percentage - 100.0 / 3.0).abs() < 1e-9);
    // rated: 1, 5, 4, 2, 5
    assert_eq!(report.original_rating, 3.4);
    // rated and genuine: 5, 4, 5
    assert_eq!(report.real_rating, 4.7);
}

#[test]
fn module_summaries() {
    let report = build_report();

    let names: Vec<_> = report.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec![STYLOMETRY_MODULE, SENTIMENT_MODULE, AI_TEXT_MODULE]);

    let sentiment = report.module(SENTIMENT_MODULE).unwrap();
    assert_eq!(sentiment.flagged_reviews, vec!["a", "d"]);
    assert_eq!(sentiment.score, 50);

    let style = report.module(STYLOMETRY_MODULE).unwrap();
    assert_eq!(style.flagged_reviews, vec!["a"]);
    assert_eq!(style.score, 23);

    let ai = report.module(AI_TEXT_MODULE).unwrap();
    assert_eq!(ai.flagged_reviews, vec!["f"]);
    assert_eq!(ai.score, 31);
}

#[test]
fn module_insights() {
    let report = build_report();

    insta::assert_snapshot!(report.module(STYLOMETRY_MODULE).unwrap().insights.join("\n"), @r###"
    1 of 6 reviews flagged
    Most common signal: Too short, lacks details
    "###);
    insta::assert_snapshot!(report.module(SENTIMENT_MODULE).unwrap().insights.join("\n"), @r###"
    2 of 6 reviews flagged
    Most common signal: Extreme positive sentiment without supporting details
    "###);
    insta::assert_snapshot!(report.module(AI_TEXT_MODULE).unwrap().insights.join("\n"), @r###"
    1 of 6 reviews flagged
    Most common signal: Contains phrases typical of AI-generated text
    "###);
}

#[test]
fn ratings_round_half_to_even() {
    let records: Vec<_> = [5, 4, 4, 4]
        .iter()
        .enumerate()
        .map(|(i, &rating)| ReviewRecord::new(format!("w{}", i), "Works fine.", Some(rating)).unwrap())
        .collect();

    let report = keyword_pipeline().report("u", "p", &records);
    assert_eq!(report.fake_reviews, 0);
    assert_eq!(report.original_rating, 4.2);
    assert_eq!(report.real_rating, 4.2);
}

#[test]
fn verdict_merges_reasons_in_detector_order() {
    let report = build_report();
    let a = &report.reviews[0];

    assert!(a.is_fake);
    assert!((a.fake_score - 0.9).abs() < 1e-9);
    insta::assert_snapshot!(a.fake_reasons.join("\n"), @r###"
    Extreme positive sentiment without supporting details
    Negative rating (1★) but positive sentiment in text
    Too short, lacks details
    "###);

    let f = &report.reviews[5];
    assert!(!f.is_fake);
    assert_eq!(f.fake_reasons[0], "No emotional language in a long review");
    assert_eq!(f.fake_reasons.len(), 6);
}

#[test]
fn verdict_keeps_metadata() {
    let report = build_report();
    let b = &report.reviews[1];

    assert_eq!(b.id, "b");
    assert_eq!(b.author, "JohnDoe123");
    assert!(b.verified);
    assert_eq!(b.rating.map(|r| r.get()), Some(5));
}

#[test]
fn seeded_pipeline_is_reproducible() {
    let config = ScanConfig {
        seed: Some(2023),
        ..Default::default()
    };
    let first = ReviewPipeline::from_config(&config)
        .unwrap()
        .report("u", "p", &records());
    let second = ReviewPipeline::from_config(&config)
        .unwrap()
        .report("u", "p", &records());

    assert_eq!(first, second);
    // the sentiment verdict does not depend on the style model
    assert_eq!(first.fake_reviews, 2);
}

#[test]
fn report_from_json_records() {
    let records = records_from_json(
        r#"[
            {"id": "r4", "text": "Absolutely terrible product. Broke after one day. Don't waste your money!", "rating": 1, "author": "AngryCustomer99", "date": "2023-12-05", "verified": false},
            {"id": "r7", "text": "Not worth the money. There are better alternatives available for less.", "rating": 2, "author": "ValueSeeker", "date": "2023-10-30", "verified": true}
        ]"#,
    )
    .unwrap();

    let report = keyword_pipeline().report("u", "p", &records);
    assert_eq!(report.total_reviews, 2);
    assert_eq!(report.fake_reviews, 0);
    assert_eq!(report.original_rating, 1.5);
    assert_eq!(report.reviews[0].date, "2023-12-05");
}

#[test]
fn report_serializes() {
    let report = build_report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_reviews"], 6);
    assert_eq!(json["reviews"][0]["rating"], 1);
    assert_eq!(json["reviews"][4]["rating"], serde_json::Value::Null);
    assert_eq!(json["modules"][1]["name"], SENTIMENT_MODULE);
}
