//! Word lists used by the heuristic detectors.
//!
//! A [`Lexicon`] is plain configuration data. It is built once (either the
//! built-in default or a TOML file) and then only ever borrowed.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{ScanError, ScanResult};

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "best",
    "perfect",
    "awesome",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "hate",
    "worst",
    "horrible",
    "disappointing",
];

const JOY_WORDS: &[&str] = &["happy", "joy", "delighted", "pleased", "glad", "thrilled", "excited"];
const SADNESS_WORDS: &[&str] = &[
    "sad",
    "unhappy",
    "disappointed",
    "depressed",
    "miserable",
    "heartbroken",
];
const ANGER_WORDS: &[&str] = &["angry", "furious", "annoyed", "irritated", "frustrated"];
const FEAR_WORDS: &[&str] = &["afraid", "scared", "frightened", "terrified", "worried"];
const SURPRISE_WORDS: &[&str] = &["surprised", "shocked", "amazed", "astonished"];
const DISGUST_WORDS: &[&str] = &["disgusted", "repulsed", "revolted", "dislike"];

/// Words that read as marketing copy when stacked together.
const SUPERLATIVES: &[&str] = &[
    "best",
    "amazing",
    "incredible",
    "perfect",
    "awesome",
    "excellent",
];

/// Terms that indicate the reviewer talked about something concrete.
const SPECIFICITY_TERMS: &[&str] = &[
    "feature",
    "battery",
    "design",
    "quality",
    "price",
    "performance",
];

static SHARED: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::default()));

/// The six basic emotion categories tracked by the sentiment scorer.
///
/// Ordering follows declaration order, so emotion maps keyed by this type
/// always iterate joy, sadness, anger, fear, surprise, disgust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
        }
    }

    fn default_words(self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => JOY_WORDS,
            Emotion::Sadness => SADNESS_WORDS,
            Emotion::Anger => ANGER_WORDS,
            Emotion::Fear => FEAR_WORDS,
            Emotion::Surprise => SURPRISE_WORDS,
            Emotion::Disgust => DISGUST_WORDS,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable word lists consumed by the sentiment and style detectors.
///
/// Every section is optional when loading from TOML; missing sections keep
/// the built-in lists.
///
/// ```toml
/// positive = ["good", "great"]
/// superlatives = ["best", "finest"]
///
/// [emotions]
/// joy = ["happy", "glad"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Tokens counted as positive sentiment.
    pub positive: HashSet<String>,
    /// Tokens counted as negative sentiment.
    pub negative: HashSet<String>,
    /// Emotion category to member tokens.
    pub emotions: BTreeMap<Emotion, HashSet<String>>,
    /// Substrings counted toward "excessive superlatives".
    pub superlatives: Vec<String>,
    /// Substrings that mark a review as discussing concrete details.
    pub specificity_terms: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: to_set(POSITIVE_WORDS),
            negative: to_set(NEGATIVE_WORDS),
            emotions: Emotion::ALL
                .iter()
                .map(|&emotion| (emotion, to_set(emotion.default_words())))
                .collect(),
            superlatives: to_vec(SUPERLATIVES),
            specificity_terms: to_vec(SPECIFICITY_TERMS),
        }
    }
}

impl Lexicon {
    /// The built-in lexicon, constructed on first use and shared afterwards.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&SHARED)
    }

    /// Parse a lexicon from TOML text.
    pub fn from_toml_str(content: &str) -> ScanResult<Self> {
        toml::from_str(content).map_err(|e| ScanError::Config {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a lexicon from a TOML file.
    pub fn load(path: &Path) -> ScanResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScanError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ScanError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Emotion categories with their word sets, in [`Emotion`] order.
    pub fn emotion_words(&self) -> impl Iterator<Item = (Emotion, &HashSet<String>)> {
        self.emotions.iter().map(|(&emotion, words)| (emotion, words))
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_vec(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
