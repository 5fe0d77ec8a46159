//! Randomized stand-in for an untrained style classifier.

use std::fmt;

use deceptiscan::text;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Beta, Distribution};

/// Texts shorter than this that stack "amazing" and "best" get a high score.
const SUSPICIOUS_MAX_CHARS: usize = 100;
const SUSPICIOUS_LOW: f64 = 0.7;
const SUSPICIOUS_HIGH: f64 = 0.9;

/// Produces placeholder style scores until a real classifier is plugged in.
///
/// Ordinary texts draw from `Beta(2, 5)`, which sits mostly below 0.5.
/// Short texts containing both "amazing" and "best" draw uniformly from
/// `[0.7, 0.9)` instead. The random source is injected so runs can be
/// reproduced from a seed.
pub struct PlaceholderScorer {
    rng: Box<dyn RngCore + Send>,
    baseline: Beta<f64>,
}

impl PlaceholderScorer {
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            baseline: Beta::new(2.0, 5.0).expect("Invalid beta parameters"),
        }
    }

    /// Deterministic scorer for tests and reproducible reports.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Whether `text` takes the high-score path.
    pub fn is_suspicious(text: &str) -> bool {
        let lowered = text.to_lowercase();
        lowered.contains("amazing")
            && lowered.contains("best")
            && text::char_len(text) < SUSPICIOUS_MAX_CHARS
    }

    pub fn score(&mut self, text: &str) -> f64 {
        if Self::is_suspicious(text) {
            self.rng.gen_range(SUSPICIOUS_LOW..SUSPICIOUS_HIGH)
        } else {
            self.baseline.sample(&mut self.rng)
        }
    }
}

impl fmt::Debug for PlaceholderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderScorer")
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "Arrived on time, does what it says.";
    const HYPE: &str = "Amazing! Best thing I ever bought.";

    #[test]
    fn test_same_seed_same_scores() {
        let mut a = PlaceholderScorer::from_seed(42);
        let mut b = PlaceholderScorer::from_seed(42);

        for text in [PLAIN, HYPE, PLAIN, "", HYPE] {
            assert_eq!(a.score(text).to_bits(), b.score(text).to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = PlaceholderScorer::from_seed(1);
        let mut b = PlaceholderScorer::from_seed(2);

        let xs: Vec<f64> = (0..8).map(|_| a.score(PLAIN)).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.score(PLAIN)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_baseline_in_unit_interval() {
        let mut scorer = PlaceholderScorer::from_seed(7);
        for _ in 0..500 {
            let score = scorer.score(PLAIN);
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_baseline_skews_low() {
        let mut scorer = PlaceholderScorer::from_seed(11);
        let n = 2000;
        let mean = (0..n).map(|_| scorer.score(PLAIN)).sum::<f64>() / n as f64;
        // Beta(2, 5) has mean 2/7
        assert!((mean - 2.0 / 7.0).abs() < 0.03, "mean = {mean}");
    }

    #[test]
    fn test_suspicious_range() {
        let mut scorer = PlaceholderScorer::from_seed(3);
        for _ in 0..200 {
            let score = scorer.score(HYPE);
            assert!((0.7..0.9).contains(&score), "score = {score}");
        }
    }

    #[test]
    fn test_suspicious_requires_short_text() {
        assert!(PlaceholderScorer::is_suspicious(HYPE));
        assert!(!PlaceholderScorer::is_suspicious("Amazing value."));

        let long = format!("{} {}", HYPE, "and it keeps going ".repeat(5));
        assert!(long.chars().count() >= 100);
        assert!(!PlaceholderScorer::is_suspicious(&long));
    }

    #[test]
    fn test_custom_rng_is_used() {
        let mut a = PlaceholderScorer::new(rand::rngs::mock::StepRng::new(0, 0));
        let mut b = PlaceholderScorer::new(rand::rngs::mock::StepRng::new(0, 0));
        assert_eq!(a.score(HYPE), b.score(HYPE));
        assert_eq!(a.score(HYPE), 0.7);
    }
}
