//! Wordlist generator driving leet expansion and case/number variants

use std::collections::BTreeSet;

use super::{apply_case_and_number_variants, LeetExpander};
use crate::types::{GenerationRequest, DEFAULT_MAX_VARIANTS};

/// Generator for bounded candidate wordlists
#[derive(Debug, Clone)]
pub struct WordlistGenerator {
    max_variants_per_word: usize,
}

impl WordlistGenerator {
    /// Create a generator with the default per-word combination cap
    pub fn new() -> Self {
        Self::with_max_variants(DEFAULT_MAX_VARIANTS)
    }

    /// Create a generator enumerating at most `max_variants` leet combinations per seed word
    pub fn with_max_variants(max_variants: usize) -> Self {
        Self {
            max_variants_per_word: max_variants,
        }
    }

    /// Generate the wordlist described by a request
    pub fn generate_request(request: &GenerationRequest) -> BTreeSet<String> {
        Self::with_max_variants(request.max_variants_per_word).generate(
            &request.seed_words,
            &request.number_patterns,
            request.max_entries,
        )
    }

    /// Generate at most `max_total` entries from the seed words.
    ///
    /// Seeds are processed in order. Once the cap is reached the remaining
    /// seeds are skipped entirely.
    pub fn generate<S: AsRef<str>>(
        &self,
        seed_words: &[S],
        number_patterns: &[String],
        max_total: usize,
    ) -> BTreeSet<String> {
        let mut wordlist = BTreeSet::new();

        for (index, seed) in seed_words.iter().enumerate() {
            if wordlist.len() >= max_total {
                tracing::warn!(
                    max_total,
                    skipped_seeds = seed_words.len() - index,
                    "Entry cap reached, remaining seed words skipped"
                );
                break;
            }

            let seed = seed.as_ref().trim();
            if seed.is_empty() {
                continue;
            }

            // Enumeration order keeps the plain seed ahead of its leet forms
            let expander = LeetExpander::new(seed);
            let combinations = expander.total();
            let leet: Vec<String> = expander.take(self.max_variants_per_word).collect();
            let entries = apply_case_and_number_variants(
                &leet,
                number_patterns,
                max_total - wordlist.len(),
            );

            tracing::debug!(
                seed_index = index,
                combinations,
                leet_variants = leet.len(),
                new_entries = entries.len(),
                "Expanded seed word"
            );

            wordlist.extend(entries);
        }

        tracing::info!(
            seeds = seed_words.len(),
            patterns = number_patterns.len(),
            entries = wordlist.len(),
            max_total,
            "Wordlist generation completed"
        );

        wordlist
    }
}

impl Default for WordlistGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate at most `max_total` entries using the default per-word cap
pub fn generate_wordlist<S: AsRef<str>>(
    seed_words: &[S],
    number_patterns: &[String],
    max_total: usize,
) -> BTreeSet<String> {
    WordlistGenerator::new().generate(seed_words, number_patterns, max_total)
}
