//! Parsing of the raw comma-separated input fields

use regex::Regex;

use crate::error::{PwToolkitError, Result};

/// Split a comma-separated seed word field, trimming and dropping empty entries
pub fn parse_seed_words(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated number pattern field.
///
/// Entries that are not made of digits only are dropped silently, as are
/// repeats of an earlier pattern.
pub fn parse_number_patterns(raw: &str) -> Vec<String> {
    let mut patterns: Vec<String> = Vec::new();
    for entry in raw.split(',').map(str::trim) {
        if is_number_pattern(entry) && !patterns.iter().any(|p| p == entry) {
            patterns.push(entry.to_string());
        }
    }
    patterns
}

fn is_number_pattern(entry: &str) -> bool {
    !entry.is_empty() && entry.chars().all(|c| c.is_ascii_digit())
}

/// Parse the maximum entry count. Must be a positive integer.
pub fn parse_max_entries(raw: &str) -> Result<usize> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(PwToolkitError::empty_input("maximum entry count"));
    }

    let integer = Regex::new(r"^\+?[0-9]+$").map_err(|e| PwToolkitError::internal(e.to_string()))?;
    if !integer.is_match(value) {
        return Err(PwToolkitError::invalid_limit(value, "not a whole number"));
    }

    match value.trim_start_matches('+').parse::<usize>() {
        Ok(0) => Err(PwToolkitError::invalid_limit(value, "must be greater than zero")),
        Ok(n) => Ok(n),
        Err(e) => Err(PwToolkitError::invalid_limit(value, e.to_string())),
    }
}
