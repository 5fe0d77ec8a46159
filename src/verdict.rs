//! Score thresholds shared by every detector.

/// Scores strictly above this value are reported as fake.
pub const FAKE_THRESHOLD: f64 = 0.7;

/// Ceiling applied to the heuristic review score.
pub const MAX_HEURISTIC_SCORE: f64 = 0.95;

/// Whether a score in `[0, 1]` crosses the fake threshold.
pub fn exceeds_threshold(score: f64) -> bool {
    score > FAKE_THRESHOLD
}

/// Clamp an accumulated heuristic score into `[0, MAX_HEURISTIC_SCORE]`.
pub fn clamp_heuristic(score: f64) -> f64 {
    score.clamp(0.0, MAX_HEURISTIC_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!exceeds_threshold(0.7));
        assert!(exceeds_threshold(0.700_001));
        assert!(!exceeds_threshold(0.0));
    }

    #[test]
    fn test_clamp_heuristic() {
        assert_eq!(clamp_heuristic(1.3), 0.95);
        assert_eq!(clamp_heuristic(-0.1), 0.0);
        assert_eq!(clamp_heuristic(0.5), 0.5);
    }
}
