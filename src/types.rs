//! Public report types returned by the evaluator.

use serde::Serialize;

/// Strength band derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    /// The evaluation was cancelled before a score was produced.
    NotEvaluated,
    Weak,
    Medium,
    Strong,
    Excellent,
}

/// Per-check contributions to the final score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub length_points: u32,
    pub entropy_points: u32,
    pub composition_points: u32,
    pub pattern_penalty: u32,
    /// Estimated brute-force search space, in bits.
    pub entropy_bits: f64,
    /// `2^entropy_bits`, for display.
    pub combinations: f64,
}

/// Result of one full password analysis.
///
/// Created once per analysis and returned to the caller; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Final score in `0..=100`, already clamped to `cap`.
    /// `None` only when the evaluation was cancelled.
    pub score: Option<u32>,
    /// Score ceiling applied, from the length check (0 for blocked passwords).
    pub cap: u32,
    /// Whether the password or a desubstituted variant is in the breach corpus.
    pub blocked: bool,
    /// Per-check contributions; absent for blocked or cancelled evaluations.
    pub breakdown: Option<ScoreBreakdown>,
    /// Human-readable notes on why checks failed or penalties applied.
    pub reasons: Vec<String>,
}

impl ScoreReport {
    /// Maps the score to a display band.
    pub fn strength(&self) -> Strength {
        match self.score {
            None => Strength::NotEvaluated,
            Some(s) if s < 50 => Strength::Weak,
            Some(s) if s < 70 => Strength::Medium,
            Some(s) if s < 90 => Strength::Strong,
            Some(_) => Strength::Excellent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_score(score: Option<u32>) -> ScoreReport {
        ScoreReport {
            score,
            cap: 100,
            blocked: false,
            breakdown: None,
            reasons: Vec::new(),
        }
    }

    #[test]
    fn test_strength_bands() {
        assert_eq!(report_with_score(None).strength(), Strength::NotEvaluated);
        assert_eq!(report_with_score(Some(0)).strength(), Strength::Weak);
        assert_eq!(report_with_score(Some(49)).strength(), Strength::Weak);
        assert_eq!(report_with_score(Some(50)).strength(), Strength::Medium);
        assert_eq!(report_with_score(Some(69)).strength(), Strength::Medium);
        assert_eq!(report_with_score(Some(70)).strength(), Strength::Strong);
        assert_eq!(report_with_score(Some(89)).strength(), Strength::Strong);
        assert_eq!(report_with_score(Some(90)).strength(), Strength::Excellent);
        assert_eq!(report_with_score(Some(100)).strength(), Strength::Excellent);
    }
}
