//! Integration tests for configuration loading, merging and engine building

use flertall::prelude::*;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
loanword_policy: regular_loanword
special_cases:
  gås: gjess
categories:
  unit: [mil, krone]
"#
    )
    .unwrap();

    let config = InflectorConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    let pluralizer = Pluralizer::from_config(&config).unwrap();

    assert_eq!(pluralizer.policy(), LoanwordPolicy::RegularLoanword);
    assert_eq!(pluralizer.pluralize("Gås"), "Gjess");
    assert_eq!(pluralizer.singularize("gjess"), "Gås");
    assert_eq!(pluralizer.pluralize("mil"), "Mil");
    assert_eq!(pluralizer.pluralize("krone"), "Krone");
    assert_eq!(pluralizer.pluralize("meter"), "Meters");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = InflectorConfig::from_yaml_file(path.to_str().unwrap()).unwrap_err();
    let err = err.downcast::<ConfigError>().unwrap();

    assert!(matches!(err, ConfigError::FileNotFound { .. }));
    assert_eq!(err.error_code(), "CONFIG_FILE_NOT_FOUND");
}

#[test]
fn test_invalid_yaml_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "loanword_policy: sometimes").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let err = InflectorConfig::from_yaml_file(&path).unwrap_err();
    match err.downcast::<ConfigError>().unwrap() {
        ConfigError::ParseError { file, .. } => assert_eq!(file, Some(path)),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_duplicate_keys_are_rejected_on_load() {
    let yaml = r#"
special_cases:
  Gås: Gjess
  GÅS: Gjess
"#;
    let err = InflectorConfig::from_yaml_str(yaml).unwrap_err();
    let err = err.downcast::<ConfigError>().unwrap();

    assert_eq!(
        err,
        ConfigError::DuplicateKey {
            key: "Gås".to_string()
        }
    );
}

#[test]
fn test_from_config_validates() {
    let mut config = InflectorConfig::default();
    config
        .special_cases
        .insert("gås".to_string(), "   ".to_string());

    let err = Pluralizer::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_merge_empty_configs() {
    let merged = InflectorConfig::merge(vec![]);

    assert_eq!(merged, InflectorConfig::default());
}

#[test]
fn test_merge_later_config_wins() {
    let base = InflectorConfig::from_yaml_str(
        r#"
loanword_policy: regular_loanword
cache_plurals: true
special_cases:
  gås: gjess
  fe: fe
categories:
  unit: [mil]
"#,
    )
    .unwrap();

    let overlay = InflectorConfig::from_yaml_str(
        r#"
loanword_policy: invariant_unit
special_cases:
  Gås: gæs
categories:
  unit: [MIL, favn]
  non_ending: [ord]
"#,
    )
    .unwrap();

    let merged = InflectorConfig::merge(vec![base, overlay]);

    assert_eq!(merged.loanword_policy(), LoanwordPolicy::InvariantUnit);
    // Not set by the overlay, so the base value survives
    assert!(merged.cache_plurals());

    assert_eq!(merged.special_cases.len(), 2);
    assert_eq!(merged.special_cases.get("Gås").map(String::as_str), Some("gæs"));
    assert!(merged.special_cases.get("gås").is_none());

    assert_eq!(
        merged.categories[&Category::Unit],
        vec!["mil".to_string(), "favn".to_string()]
    );
    assert_eq!(merged.categories[&Category::NonEnding], vec!["ord".to_string()]);
}

#[test]
fn test_merged_config_builds_engine() {
    let first = InflectorConfig::from_yaml_str("categories:\n  non_ending: [ord]\n").unwrap();
    let second = InflectorConfig::from_yaml_str("cache_plurals: true\n").unwrap();

    let pluralizer = Pluralizer::from_config(&InflectorConfig::merge(vec![first, second])).unwrap();

    assert_eq!(pluralizer.pluralize("ord"), "Ord");
    assert_eq!(pluralizer.singularize("ord"), "Ord");
    assert!(pluralizer.cache().is_some());
}
