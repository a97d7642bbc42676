//! zxcvbn backed strength scorer

use chrono::Utc;
use zxcvbn::zxcvbn;

use super::StrengthScorer;
use crate::types::{ScoreBucket, StrengthReport};

/// Scorer using the zxcvbn heuristic estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnScorer;

impl ZxcvbnScorer {
    pub fn new() -> Self {
        Self
    }
}

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, password: &str, user_inputs: &[&str]) -> StrengthReport {
        let entropy = zxcvbn(password, user_inputs);
        let score = entropy.score() as u8;

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback.suggestions().iter().map(|s| s.to_string()).collect(),
            ),
            None => (None, Vec::new()),
        };

        StrengthReport {
            score,
            bucket: ScoreBucket::from_score(score),
            warning,
            suggestions,
            guesses_log10: entropy.guesses_log10(),
            crack_time: entropy
                .crack_times()
                .offline_slow_hashing_1e4_per_second()
                .to_string(),
            scorer: self.name().to_string(),
            analyzed_at: Utc::now(),
        }
    }

    fn name(&self) -> &'static str {
        "zxcvbn"
    }
}
