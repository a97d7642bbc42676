//! Leetspeak combination generator

use std::collections::BTreeSet;

use super::substitutions;

/// Generator for the leetspeak combinations of a single word.
///
/// Combinations are enumerated in mixed-radix order over the per-character
/// choices, with the last character varying fastest. Index 0 is always the
/// lower-cased word itself.
pub struct LeetExpander {
    choices: Vec<Vec<char>>,
    current_index: u64,
    total: u64,
}

impl LeetExpander {
    /// Create a new generator for the given word
    pub fn new(word: &str) -> Self {
        let choices: Vec<Vec<char>> = word
            .to_lowercase()
            .chars()
            .map(|c| match substitutions(c) {
                Some(options) => options.to_vec(),
                None => vec![c],
            })
            .collect();

        // Saturates for very long words; callers always cap well below this.
        let total = choices
            .iter()
            .fold(1u64, |acc, options| acc.saturating_mul(options.len() as u64));

        Self {
            choices,
            current_index: 0,
            total,
        }
    }

    /// Get total number of combinations
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Generate the combination at a specific index
    pub fn variant_at(&self, index: u64) -> Option<String> {
        if index >= self.total {
            return None;
        }

        let mut result = vec![' '; self.choices.len()];
        let mut n = index;

        for i in (0..self.choices.len()).rev() {
            let options = &self.choices[i];
            let base = options.len() as u64;
            result[i] = options[(n % base) as usize];
            n /= base;
        }

        Some(result.into_iter().collect())
    }
}

impl Iterator for LeetExpander {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let variant = self.variant_at(self.current_index)?;
        self.current_index += 1;
        Some(variant)
    }
}

/// Expand a word into at most `max_variants` leetspeak combinations.
///
/// The first `max_variants` combinations in enumeration order are kept. An
/// empty word yields a single empty variant.
pub fn expand_leet_variants(word: &str, max_variants: usize) -> BTreeSet<String> {
    LeetExpander::new(word).take(max_variants).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expander_total() {
        // p(1) * a(3) * s(3) * s(3)
        assert_eq!(LeetExpander::new("pass").total(), 27);
        assert_eq!(LeetExpander::new("xyz").total(), 1);
        assert_eq!(LeetExpander::new("").total(), 1);
    }

    #[test]
    fn test_variant_at() {
        let gen = LeetExpander::new("at");
        assert_eq!(gen.variant_at(0), Some("at".to_string()));
        assert_eq!(gen.variant_at(1), Some("a7".to_string()));
        assert_eq!(gen.variant_at(2), Some("4t".to_string()));
        assert_eq!(gen.variant_at(5), Some("@7".to_string()));
        assert_eq!(gen.variant_at(6), None);
    }

    #[test]
    fn test_expander_iterator() {
        let mut gen = LeetExpander::new("Hi");
        assert_eq!(gen.next(), Some("hi".to_string()));
        assert_eq!(gen.next(), Some("h1".to_string()));
        assert_eq!(gen.next(), Some("h!".to_string()));
        assert_eq!(gen.next(), None);
        assert_eq!(gen.next(), None);
    }

    #[test]
    fn test_expand_includes_original_and_substituted() {
        let variants = expand_leet_variants("pass", 100);
        assert_eq!(variants.len(), 27);
        assert!(variants.contains("pass"));
        assert!(variants.contains("p4$$"));
        assert!(variants.contains("p@55"));
    }

    #[test]
    fn test_expand_respects_cap_and_length() {
        let word = "TestSeattle";
        for cap in [0, 1, 7, 50] {
            let variants = expand_leet_variants(word, cap);
            assert!(variants.len() <= cap);
            for v in &variants {
                assert_eq!(v.chars().count(), word.chars().count());
            }
        }
        assert_eq!(expand_leet_variants(word, 50).len(), 50);
    }

    #[test]
    fn test_expand_truncates_in_enumeration_order() {
        let variants = expand_leet_variants("tea", 3);
        let expected: BTreeSet<String> = ["tea", "te4", "te@"].iter().map(|s| s.to_string()).collect();
        assert_eq!(variants, expected);
    }

    #[test]
    fn test_expand_empty_word() {
        let variants = expand_leet_variants("", 10);
        assert_eq!(variants.len(), 1);
        assert!(variants.contains(""));
    }

    #[test]
    fn test_expand_unmapped_word() {
        // r, h, u, m, b have no substitutions
        let variants = expand_leet_variants("Rhumb", 50);
        assert_eq!(LeetExpander::new("Rhumb").total(), 1);
        assert_eq!(variants.len(), 1);
        assert!(variants.contains("rhumb"));
    }
}
