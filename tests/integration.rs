//! Integration tests for pw-toolkit

use std::collections::BTreeSet;

use pw_toolkit::{
    error::PwToolkitError,
    generate_to_file, generate_wordlist,
    types::{AnalysisRequest, GenerationRequest, ScoreBucket},
    wordlist::{
        expand_leet_variants, parse_number_patterns, parse_seed_words, read_wordlist,
        write_wordlist, LEET_TABLE,
    },
    StrengthReporter, Theme, ToolkitConfig, WordlistGenerator,
};

/// Every character a variant of `word` may contain
fn alphabet(word: &str) -> BTreeSet<char> {
    let mut chars = BTreeSet::new();
    for c in word.to_lowercase().chars() {
        let choices: Vec<char> = LEET_TABLE
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|(_, options)| options.to_vec())
            .unwrap_or_else(|| vec![c]);
        for choice in choices {
            chars.insert(choice);
            chars.extend(choice.to_uppercase());
        }
    }
    chars
}

#[test]
fn test_leet_variants_bounded_and_same_length() {
    for word in ["pass", "sunshine", "lollipop", "qwerty", ""] {
        for cap in [1, 5, 50, 1000] {
            let variants = expand_leet_variants(word, cap);
            assert!(variants.len() <= cap);
            assert!(!variants.is_empty());
            for v in &variants {
                assert_eq!(v.chars().count(), word.chars().count());
            }
        }
    }
}

#[test]
fn test_pass_variants() {
    let variants = expand_leet_variants("pass", 100);
    assert!(variants.contains("pass"));
    assert!(variants.contains("p4$$"));
}

#[test]
fn test_cat_wordlist_alphabet() {
    let list = generate_wordlist(&["cat"], &["7".to_string()], 10);
    assert!(list.len() <= 10);

    let mut allowed = alphabet("cat");
    allowed.insert('7');
    for entry in &list {
        assert!(entry.chars().all(|c| allowed.contains(&c)), "unexpected entry {}", entry);
    }
}

#[test]
fn test_generation_is_repeatable() {
    let request = GenerationRequest::from_raw("dragon, monkey, football", "1990, 123", "250").unwrap();
    let first = WordlistGenerator::generate_request(&request);
    let second = WordlistGenerator::generate_request(&request);
    assert_eq!(first.len(), 250);
    assert_eq!(first, second);
}

#[test]
fn test_every_entry_derives_from_a_seed() {
    let seeds = parse_seed_words("love, star");
    let numbers = parse_number_patterns("2001, abc, 07");
    assert_eq!(numbers, vec!["2001", "07"]);

    let list = generate_wordlist(&seeds, &numbers, 400);
    let leet: BTreeSet<String> = seeds
        .iter()
        .flat_map(|s| expand_leet_variants(s, 50))
        .collect();

    for entry in &list {
        let mut core = entry.as_str();
        for n in &numbers {
            core = core.strip_prefix(n.as_str()).unwrap_or(core);
            core = core.strip_suffix(n.as_str()).unwrap_or(core);
        }
        assert!(
            leet.iter().any(|v| v.to_lowercase() == core.to_lowercase()),
            "entry {} does not derive from a seed",
            entry
        );
    }
}

#[test]
fn test_wordlist_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom_wordlist.txt");

    let list = generate_wordlist(&["secret"], &["42".to_string()], 120);
    let written = write_wordlist(&list, &path).unwrap();
    assert_eq!(written, list.len());
    assert_eq!(read_wordlist(&path).unwrap(), list);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

#[test]
fn test_generate_to_file_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let request = GenerationRequest::from_raw("zzz", "", "500")
        .unwrap()
        .with_output_path(&path);

    let summary = generate_to_file(&request).unwrap();
    // "zzz" has no substitutions: zzz, ZZZ, Zzz
    assert_eq!(summary.entries, 3);
    assert!(!summary.cap_reached);
    assert_eq!(summary.output_path, path);
}

#[test]
fn test_invalid_limit_rejected() {
    let err = GenerationRequest::from_raw("cat", "1", "five hundred").unwrap_err();
    assert!(matches!(err, PwToolkitError::InvalidLimit { .. }));

    let err = GenerationRequest::from_raw("cat", "1", "").unwrap_err();
    assert!(matches!(err, PwToolkitError::EmptyInput { .. }));
}

#[test]
fn test_empty_password_rejected() {
    let err = StrengthReporter::new()
        .analyze(&AnalysisRequest::new(""))
        .unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("password"));
}

#[test]
fn test_strength_report_buckets() {
    let reporter = StrengthReporter::new();
    let weak = reporter.analyze(&AnalysisRequest::new("123456")).unwrap();
    assert_eq!(weak.bucket, ScoreBucket::VeryWeak);
    assert!(!weak.feedback_text().is_empty());

    let strong = reporter
        .analyze(&AnalysisRequest::new("correct horse battery staple unicorn 93!"))
        .unwrap();
    assert!(strong.score >= 3);
}

#[test]
fn test_config_defaults() {
    let config = ToolkitConfig::default();
    assert_eq!(config.max_entries, 500);
    assert_eq!(config.theme, Theme::Light);
}

#[test]
fn test_error_handling() {
    let error = PwToolkitError::validation("test error".to_string());
    assert!(error.to_string().contains("test error"));

    let error = PwToolkitError::config("config error".to_string());
    assert!(error.to_string().contains("config error"));

    let error = PwToolkitError::internal("internal error");
    assert!(error.to_string().contains("internal error"));
}

#[test]
fn test_library_initialization() {
    let result = pw_toolkit::init();
    assert!(result.is_ok());
}
