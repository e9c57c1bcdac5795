//! Core module containing the inflection engine and its reference data

pub mod cache;
pub mod error;
pub mod normalize;
pub mod pluralize;
pub mod rules;
pub mod singularize;
pub mod tables;

pub use cache::PluralCache;
pub use error::ConfigError;
pub use normalize::{NormalizedWord, normalize, normalize_opt};
pub use pluralize::Pluralizer;
pub use rules::{PluralRule, SingularRule};
pub use tables::{Category, CategorySet, LexicalTables};
