//! # Flertall
//!
//! Singular/plural inflection for Norwegian nouns, built as a deterministic
//! rule cascade.
//!
//! ## Features
//!
//! - **Ordered Rule Cascade**: Overlapping word classes resolved by a fixed priority
//! - **Irregular Forms**: Vowel mutation (bok → bøker), kinship terms (bror → brødre)
//! - **Invariant Classes**: Units, one-syllable neuter nouns and uninflected words
//! - **Bidirectional**: `pluralize` and `singularize` share one normalization and table layer
//! - **Configuration-Based**: Extra special cases, category members and loanword policy via YAML
//! - **Total**: Never fails; unknown words get the default ending
//!
//! ## Quick Start
//!
//! ```rust
//! use flertall::prelude::*;
//!
//! assert_eq!(pluralize("bok"), "Bøker");
//! assert_eq!(pluralize("jente"), "Jenter");
//! assert_eq!(singularize("Brødre"), "Bror");
//!
//! // A configured engine
//! let config = InflectorConfig::from_yaml_str("loanword_policy: regular_loanword").unwrap();
//! let pluralizer = Pluralizer::from_config(&config).unwrap();
//! assert_eq!(pluralizer.pluralize("meter"), "Meters");
//! ```

pub mod config;
pub mod core;

pub use crate::core::pluralize::pluralize;
pub use crate::core::singularize::singularize;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Engine ===
    pub use crate::core::{
        cache::PluralCache,
        normalize::{NormalizedWord, normalize},
        pluralize::{Pluralizer, pluralize},
        rules::{PluralRule, SingularRule},
        singularize::singularize,
        tables::{Category, LexicalTables},
    };

    // === Config ===
    pub use crate::config::{InflectorConfig, LoanwordPolicy};

    // === Errors ===
    pub use crate::core::error::ConfigError;
}
