use newsroom_core::{Platform, PlatformPolicy, PlatformPolicyTable, ValidationIssue, ValidationResult};
use strum::IntoEnumIterator;

#[test]
fn test_defaults_cover_every_platform() {
    let table = PlatformPolicyTable::editorial_defaults();
    assert_eq!(table.len(), 4);
    for platform in Platform::iter() {
        let policy = table.get(platform).unwrap();
        assert!(policy.char_min() <= policy.char_max());
        assert!(policy.hashtag_min() <= policy.hashtag_max());
        assert!(!policy.tone_directives().is_empty());
    }
}

#[test]
fn test_default_bounds_match_editorial_rules() {
    let table = PlatformPolicyTable::editorial_defaults();
    let linkedin = table.get(Platform::LinkedIn).unwrap();
    assert_eq!((*linkedin.char_min(), *linkedin.char_max()), (800, 1400));
    assert_eq!((*linkedin.hashtag_min(), *linkedin.hashtag_max()), (2, 4));
    assert!(*linkedin.long_form());

    let twitter = table.get(Platform::Twitter).unwrap();
    assert_eq!((*twitter.char_min(), *twitter.char_max()), (120, 280));
    assert_eq!((*twitter.hashtag_min(), *twitter.hashtag_max()), (0, 2));
    assert!(!*twitter.long_form());
}

#[test]
fn test_inverted_hashtag_range_is_rejected() {
    assert!(PlatformPolicy::new(10, 20, 3, 1, vec![], false).is_err());
}

#[test]
fn test_range_checks_are_inclusive() {
    let policy = PlatformPolicy::new(120, 280, 0, 2, vec![], false).unwrap();
    assert!(policy.chars_in_range(120));
    assert!(policy.chars_in_range(280));
    assert!(!policy.chars_in_range(119));
    assert!(policy.hashtags_in_range(2));
    assert!(!policy.hashtags_in_range(3));
}

#[test]
fn test_validation_result_validity_follows_errors() {
    let warning_only = ValidationResult::new(vec![], vec![ValidationIssue::WeakStructure], 900, 2);
    assert!(warning_only.is_valid());
    assert_eq!(warning_only.warning_messages().len(), 1);

    let failing = ValidationResult::new(
        vec![ValidationIssue::TooShort { count: 20, min: 120 }],
        vec![],
        20,
        0,
    );
    assert!(!failing.is_valid());
    assert_eq!(
        failing.error_messages(),
        vec!["Content too short: 20 characters (minimum 120)".to_string()]
    );
}

#[test]
fn test_soft_issues_are_not_blocking() {
    assert!(!ValidationIssue::TooFewHashtags { count: 0, min: 2 }.is_blocking());
    assert!(!ValidationIssue::WeakStructure.is_blocking());
    assert!(ValidationIssue::MissingClosing.is_blocking());
}
