//! Wordlist generation - leetspeak, case and number pattern variants
//!
//! Seed words are expanded into leetspeak combinations, each combination gets
//! case variants, and number patterns are attached on both sides. Growth is
//! bounded by a per-word combination cap and a global entry cap.

mod generator;
pub mod input;
mod leet;
mod output;
mod variants;

pub use generator::{generate_wordlist, WordlistGenerator};
pub use input::{parse_max_entries, parse_number_patterns, parse_seed_words};
pub use leet::{expand_leet_variants, LeetExpander};
pub use output::{read_wordlist, write_wordlist};
pub use variants::{apply_case_and_number_variants, case_forms};

use chrono::Utc;

use crate::error::Result;
use crate::types::{GenerationRequest, WordlistSummary};

/// Leetspeak substitution table. The first choice is always the letter itself.
pub const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['a', '4', '@']),
    ('e', &['e', '3']),
    ('i', &['i', '1', '!']),
    ('o', &['o', '0']),
    ('s', &['s', '$', '5']),
    ('t', &['t', '7']),
    ('l', &['l', '1']),
];

/// Substitution choices for a lowercase character, if it has any
pub fn substitutions(c: char) -> Option<&'static [char]> {
    LEET_TABLE
        .iter()
        .find(|(letter, _)| *letter == c)
        .map(|(_, choices)| *choices)
}

/// Generate the requested wordlist and write it to the request's output path
pub fn generate_to_file(request: &GenerationRequest) -> Result<WordlistSummary> {
    let wordlist = WordlistGenerator::generate_request(request);
    let entries = write_wordlist(&wordlist, &request.output_path)?;

    Ok(WordlistSummary {
        entries,
        max_entries: request.max_entries,
        cap_reached: entries >= request.max_entries,
        output_path: request.output_path.clone(),
        seed_words: request.seed_words.clone(),
        number_patterns: request.number_patterns.clone(),
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_starts_with_identity() {
        for (letter, choices) in LEET_TABLE {
            assert_eq!(choices.first(), Some(letter));
        }
    }

    #[test]
    fn test_substitutions() {
        assert_eq!(substitutions('a'), Some(&['a', '4', '@'][..]));
        assert_eq!(substitutions('s'), Some(&['s', '$', '5'][..]));
        assert_eq!(substitutions('b'), None);
        // Lookup is on lowercase letters only
        assert_eq!(substitutions('A'), None);
    }

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom_wordlist.txt");
        let request = GenerationRequest::from_raw("cat", "7", "10")
            .unwrap()
            .with_output_path(&path);

        let summary = generate_to_file(&request).unwrap();
        assert_eq!(summary.entries, 10);
        assert!(summary.cap_reached);
        assert_eq!(read_wordlist(&path).unwrap().len(), 10);
    }
}
