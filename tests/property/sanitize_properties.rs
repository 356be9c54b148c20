//! Property-based tests for sanitization guarantees

use proptest::prelude::*;
use rmchars::sanitize::{Classifier, Platform};

/// Names mixing plain text with invalid punctuation, dots, spaces, controls and emoji.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9_-]{1,4}",
            Just(".".to_string()),
            Just(" ".to_string()),
            Just("\t".to_string()),
            prop::sample::select(vec!["\\", "/", "\"", ":", "<", ">", "^", "|", "*", "?"])
                .prop_map(str::to_string),
            Just("😇".to_string()),
            Just("日本".to_string()),
            Just("é".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(name in name_strategy()) {
        let classifier = Classifier::for_platform(Platform::Posix);
        let once = classifier.sanitize(&name);
        prop_assert_eq!(classifier.sanitize(&once), once);
    }

    #[test]
    fn sanitized_names_are_valid(name in name_strategy()) {
        for platform in [Platform::Posix, Platform::Windows] {
            let classifier = Classifier::for_platform(platform);
            prop_assert!(!classifier.is_invalid(&classifier.sanitize(&name)));
        }
    }

    #[test]
    fn classification_is_total(name in any::<String>()) {
        let classifier = Classifier::for_platform(Platform::Posix);
        let sanitized = classifier.sanitize(&name);
        prop_assert!(!classifier.is_invalid(&sanitized));
        prop_assert!(sanitized.chars().count() <= name.chars().count());
    }

    #[test]
    fn sanitized_names_have_clean_edges(name in name_strategy()) {
        let sanitized = Classifier::for_platform(Platform::Posix).sanitize(&name);
        prop_assert!(!sanitized.ends_with('.'));
        prop_assert!(!sanitized.ends_with(char::is_whitespace));
        prop_assert!(!sanitized.starts_with(char::is_whitespace));
    }

    #[test]
    fn valid_names_only_lose_edges(name in "[a-z][a-z .]{0,10}") {
        let classifier = Classifier::for_platform(Platform::Posix);
        prop_assert!(!classifier.is_invalid(&name));
        let sanitized = classifier.sanitize(&name);
        prop_assert!(name.starts_with(&sanitized));
    }
}

#[test]
fn empty_name_edge_case() {
    let classifier = Classifier::for_platform(Platform::Posix);
    assert!(!classifier.is_invalid(""));
    assert_eq!(classifier.sanitize(""), "");
    // An all-invalid name sanitizes to the empty string, which is itself valid.
    let emptied = classifier.sanitize("*?:");
    assert_eq!(emptied, "");
    assert!(!classifier.is_invalid(&emptied));
}
