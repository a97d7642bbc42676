//! pw-toolkit - password strength analysis and wordlist generation
//!
//! Scores passwords with zxcvbn and builds small candidate wordlists from
//! seed words using leetspeak, case and number pattern variants. Meant for
//! education and awareness, not for cracking.

pub mod config;
pub mod error;
pub mod opener;
pub mod strength;
pub mod theme;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use config::ToolkitConfig;
pub use error::{PwToolkitError, Result};
pub use theme::Theme;
pub use types::{
    AnalysisRequest, GenerationRequest, ScoreBucket, StrengthReport, WordlistSummary,
};

// Re-export main functionality
pub use strength::{StrengthReporter, StrengthScorer, ZxcvbnScorer};
pub use wordlist::{generate_to_file, generate_wordlist, write_wordlist, WordlistGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
