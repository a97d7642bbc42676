//! Core types and structures for pw-toolkit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::wordlist::input::{parse_max_entries, parse_number_patterns, parse_seed_words};

/// Default number of entries in a generated wordlist
pub const DEFAULT_MAX_ENTRIES: usize = 500;

/// Default number of leet combinations enumerated per seed word
pub const DEFAULT_MAX_VARIANTS: usize = 50;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "custom_wordlist.txt";

/// Password strength category as reported by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl ScoreBucket {
    /// Map a 0-4 score onto its bucket. Scores above 4 saturate.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn score(&self) -> u8 {
        *self as u8
    }

    /// Display colour for the bucket
    pub fn color(&self) -> &'static str {
        match self {
            Self::VeryWeak => "#e53935",
            Self::Weak => "#fb8c00",
            Self::Fair => "#fdd835",
            Self::Strong => "#43a047",
            Self::VeryStrong => "#2e7d32",
        }
    }
}

impl std::fmt::Display for ScoreBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBucket::VeryWeak => write!(f, "very weak"),
            ScoreBucket::Weak => write!(f, "weak"),
            ScoreBucket::Fair => write!(f, "fair"),
            ScoreBucket::Strong => write!(f, "strong"),
            ScoreBucket::VeryStrong => write!(f, "very strong"),
        }
    }
}

/// Password strength analysis request
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub password: String,
    /// Extra words the scorer should treat as guessable (names, seed words)
    pub user_inputs: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            user_inputs: Vec::new(),
        }
    }

    pub fn with_user_inputs(mut self, inputs: Vec<String>) -> Self {
        self.user_inputs = inputs;
        self
    }
}

/// Result of a password strength analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Score from 0 (very weak) to 4 (very strong)
    pub score: u8,
    pub bucket: ScoreBucket,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    pub guesses_log10: f64,
    /// Human readable crack time for an offline slow-hash attack
    pub crack_time: String,
    pub scorer: String,
    pub analyzed_at: DateTime<Utc>,
}

impl StrengthReport {
    /// Warning followed by suggestions, one per line.
    ///
    /// Falls back to a congratulatory line when the scorer had nothing to say.
    pub fn feedback_text(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        if let Some(warning) = self.warning.as_deref().filter(|w| !w.is_empty()) {
            lines.push(warning);
        }
        lines.extend(self.suggestions.iter().map(String::as_str).filter(|s| !s.is_empty()));

        if lines.is_empty() {
            "Strong password!".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Wordlist generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub seed_words: Vec<String>,
    pub number_patterns: Vec<String>,
    pub max_entries: usize,
    pub max_variants_per_word: usize,
    pub output_path: PathBuf,
}

impl GenerationRequest {
    /// Build a request from the raw comma-separated input fields
    pub fn from_raw(words: &str, numbers: &str, max_entries: &str) -> Result<Self> {
        Ok(Self {
            seed_words: parse_seed_words(words),
            number_patterns: parse_number_patterns(numbers),
            max_entries: parse_max_entries(max_entries)?,
            ..Default::default()
        })
    }

    pub fn with_max_variants(mut self, max_variants: usize) -> Self {
        self.max_variants_per_word = max_variants;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            seed_words: Vec::new(),
            number_patterns: Vec::new(),
            max_entries: DEFAULT_MAX_ENTRIES,
            max_variants_per_word: DEFAULT_MAX_VARIANTS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Outcome of a wordlist generation written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlistSummary {
    pub entries: usize,
    pub max_entries: usize,
    pub cap_reached: bool,
    pub output_path: PathBuf,
    pub seed_words: Vec<String>,
    pub number_patterns: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
