//! Case and number pattern variants

use std::collections::BTreeSet;

/// The three case forms of a word: as-is, upper case and capitalized.
///
/// Capitalized means first character upper case, the rest lower case.
/// Forms may coincide (e.g. for words without letters).
pub fn case_forms(word: &str) -> [String; 3] {
    [word.to_string(), word.to_uppercase(), capitalize(word)]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Set that refuses new entries once it holds `limit` of them
struct Bounded {
    entries: BTreeSet<String>,
    limit: usize,
}

impl Bounded {
    fn new(limit: usize) -> Self {
        Self {
            entries: BTreeSet::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    /// Insert an entry, returns false once the limit is reached
    fn offer(&mut self, entry: String) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.insert(entry);
        true
    }
}

/// Expand leet variants into case forms with number patterns attached.
///
/// `max_total` is the remaining budget of the caller. Variants are visited in
/// the order given, number patterns likewise; each case form is added bare,
/// then as `form+number` and `number+form` for every pattern. Insertion stops
/// as soon as the result holds `max_total` entries.
pub fn apply_case_and_number_variants<I, S>(
    variants: I,
    number_patterns: &[String],
    max_total: usize,
) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Bounded::new(max_total);

    'variants: for variant in variants {
        for form in case_forms(variant.as_ref()) {
            if !result.offer(form.clone()) {
                break 'variants;
            }
            for number in number_patterns {
                if !result.offer(format!("{form}{number}")) || !result.offer(format!("{number}{form}")) {
                    break 'variants;
                }
            }
        }
    }

    result.entries
}
