//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::normalize::normalize;
use crate::core::tables::Category;
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::ErrorKind;

/// How borrowed nouns that collide with Norwegian ones are inflected
///
/// "Meter" and "Ting" exist both as Norwegian words (invariant in the plural)
/// and as English loanwords (plural in "-s"). Which reading applies is a
/// deployment decision, so it is a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanwordPolicy {
    /// Loanwords follow their Norwegian class ("Meter" → "Meter")
    #[default]
    InvariantUnit,

    /// Members of the loanword set take "-s" ("Meter" → "Meters")
    RegularLoanword,
}

/// Options for building a [`Pluralizer`](crate::core::Pluralizer)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InflectorConfig {
    /// Loanword policy; defaults to [`LoanwordPolicy::InvariantUnit`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loanword_policy: Option<LoanwordPolicy>,

    /// Record produced plurals and return them unchanged when pluralized again
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_plurals: Option<bool>,

    /// Extra special cases (singular → plural), looked up after the built-ins
    #[serde(default)]
    pub special_cases: IndexMap<String, String>,

    /// Extra members per category
    #[serde(default)]
    pub categories: IndexMap<Category, Vec<String>>,
}

impl InflectorConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        tracing::debug!(path, "Loading inflector configuration");

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Effective loanword policy
    pub fn loanword_policy(&self) -> LoanwordPolicy {
        self.loanword_policy.unwrap_or_default()
    }

    /// Whether the plural cache is enabled (off unless set)
    pub fn cache_plurals(&self) -> bool {
        self.cache_plurals.unwrap_or(false)
    }

    /// Check that every extension is usable
    ///
    /// Special-case keys must be unique once normalized, and no key, value or
    /// category member may be blank.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let mut keys = HashSet::new();
        for (singular, plural) in &self.special_cases {
            let key = normalize(singular);
            if key.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "special_cases".to_string(),
                    value: singular.clone(),
                    message: "key must not be empty".to_string(),
                });
            }
            if normalize(plural).is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("special_cases.{}", singular),
                    value: plural.clone(),
                    message: "plural must not be empty".to_string(),
                });
            }
            if !keys.insert(key.folded().to_string()) {
                return Err(ConfigError::DuplicateKey {
                    key: key.into_string(),
                });
            }
        }

        for (category, words) in &self.categories {
            if let Some(blank) = words.iter().find(|w| w.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("categories.{}", category),
                    value: blank.clone(),
                    message: "member must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Merge multiple configurations into one
    ///
    /// Later configurations win: scalar options they set replace earlier ones,
    /// their special cases replace entries with the same normalized key, and
    /// their category members are appended when not already present.
    pub fn merge(configs: Vec<InflectorConfig>) -> Self {
        let mut merged = InflectorConfig::default();

        for config in configs {
            if config.loanword_policy.is_some() {
                merged.loanword_policy = config.loanword_policy;
            }
            if config.cache_plurals.is_some() {
                merged.cache_plurals = config.cache_plurals;
            }

            for (singular, plural) in config.special_cases {
                let folded = normalize(&singular).folded().to_string();
                merged
                    .special_cases
                    .retain(|existing, _| normalize(existing).folded() != folded);
                merged.special_cases.insert(singular, plural);
            }

            for (category, words) in config.categories {
                let members = merged.categories.entry(category).or_default();
                for word in words {
                    let folded = word.trim().to_lowercase();
                    if !members.iter().any(|m| m.trim().to_lowercase() == folded) {
                        members.push(word);
                    }
                }
            }
        }

        merged
    }
}
