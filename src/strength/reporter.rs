//! Strength reporter guarding input before scoring

use super::{StrengthScorer, ZxcvbnScorer};
use crate::error::{PwToolkitError, Result};
use crate::types::{AnalysisRequest, StrengthReport};

/// Relays password scores from a scoring engine
pub struct StrengthReporter<S = ZxcvbnScorer> {
    scorer: S,
}

impl StrengthReporter<ZxcvbnScorer> {
    /// Create a reporter backed by zxcvbn
    pub fn new() -> Self {
        Self::with_scorer(ZxcvbnScorer::new())
    }
}

impl Default for StrengthReporter<ZxcvbnScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StrengthScorer> StrengthReporter<S> {
    /// Create a reporter with a custom scoring engine
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score the requested password. An empty password is rejected without
    /// reaching the scorer.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<StrengthReport> {
        if request.password.is_empty() {
            return Err(PwToolkitError::empty_input("password"));
        }

        let user_inputs: Vec<&str> = request
            .user_inputs
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();

        let report = self.scorer.score(&request.password, &user_inputs);

        tracing::info!(
            scorer = self.scorer.name(),
            score = report.score,
            bucket = %report.bucket,
            suggestions = report.suggestions.len(),
            "Password analyzed"
        );

        Ok(report)
    }
}
