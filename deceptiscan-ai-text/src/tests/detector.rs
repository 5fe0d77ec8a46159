use crate::AiTextDetector;

const FORMULAIC: &str = "I would recommend this great product to anyone who wants a good and amazing gadget for the whole family at home. I think the pros of this excellent device clearly outweigh the cons for most good and great people. I found the whole overall experience to be wonderful and fantastic from start to finish with no real issues.";

const HUMAN: &str = "I bought this blender last month and the motor handles frozen fruit without trouble, although the lid is a bit loose.";

#[test]
fn formulaic_review_is_flagged() {
    let result = AiTextDetector::new().analyze_review(FORMULAIC);

    assert_eq!(result.features.sentence_count, 3);
    assert_eq!(result.features.word_count, 58);
    assert!((result.ai_score - 0.85).abs() < 1e-9);
    assert!(result.is_ai_generated);
    insta::assert_snapshot!(result.reasons.join("\n"), @r###"
    Contains phrases typical of AI-generated text
    Formulaic pros and cons structure
    High density of generic adjectives
    Repetitive sentence openings
    Uniform sentence length
    "###);
}

#[test]
fn plain_review_is_not_flagged() {
    let result = AiTextDetector::new().analyze_review(HUMAN);

    // one sentence of 21 words: 0.1 + 0.15
    assert!((result.ai_score - 0.25).abs() < 1e-9);
    assert!(!result.is_ai_generated);
    assert!(result.reasons.is_empty());
}

#[test]
fn empty_review() {
    let result = AiTextDetector::default().analyze_review("");
    assert_eq!(result.ai_score, 0.0);
    assert!(!result.is_ai_generated);
    assert!(result.reasons.is_empty());
}

#[test]
fn batch_keeps_order() {
    let results = AiTextDetector::new().analyze_reviews([FORMULAIC, HUMAN, ""]);
    let flags: Vec<bool> = results.iter().map(|r| r.is_ai_generated).collect();
    assert_eq!(flags, vec![true, false, false]);
}

#[test]
fn score_stays_in_unit_interval() {
    let long = "In summary, the pros beat the cons. ".repeat(30);
    for text in [FORMULAIC, HUMAN, "", "!!!", long.as_str()] {
        let result = AiTextDetector::new().analyze_review(text);
        assert!((0.0..=1.0).contains(&result.ai_score), "{text:?}");
        assert_eq!(result.is_ai_generated, result.ai_score > 0.7);
    }
}
