//! Password strength reporting
//!
//! Scoring itself is delegated to a [`StrengthScorer`]; the reporter only
//! guards the input and relays the result.

pub mod reporter;
pub mod scorer;

pub use reporter::StrengthReporter;
pub use scorer::ZxcvbnScorer;

use crate::types::StrengthReport;

/// Trait for password strength scoring engines
pub trait StrengthScorer {
    /// Score a non-empty password. `user_inputs` are words the engine should
    /// treat as known to an attacker.
    fn score(&self, password: &str, user_inputs: &[&str]) -> StrengthReport;

    /// Get the engine name
    fn name(&self) -> &'static str;
}

impl<S: StrengthScorer + ?Sized> StrengthScorer for &S {
    fn score(&self, password: &str, user_inputs: &[&str]) -> StrengthReport {
        (**self).score(password, user_inputs)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
