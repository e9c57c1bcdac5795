//! Pluralization of Norwegian nouns
//!
//! Handles the main Norwegian plural rules, vowel-mutating classes, invariant
//! classes and a table of irregular forms.

use crate::config::{InflectorConfig, LoanwordPolicy};
use crate::core::cache::PluralCache;
use crate::core::error::ConfigError;
use crate::core::normalize::normalize;
use crate::core::rules::{self, PluralRule, SingularRule};
use crate::core::tables::LexicalTables;
use std::sync::OnceLock;

/// Converts Norwegian nouns between singular and plural forms
///
/// An engine owns its tables and rule cascades; both are fixed once it is
/// built. All methods take `&self` and the engine can be shared freely
/// between threads.
#[derive(Debug)]
pub struct Pluralizer {
    pub(crate) tables: LexicalTables,
    plural_rules: Vec<PluralRule>,
    pub(crate) singular_rules: Vec<SingularRule>,
    policy: LoanwordPolicy,
    cache: Option<PluralCache>,
}

impl Pluralizer {
    /// Engine with built-in tables and the default configuration
    pub fn new() -> Self {
        Self::with_tables(
            LexicalTables::builtin(),
            LoanwordPolicy::default(),
            false,
        )
    }

    /// Engine built from a configuration
    pub fn from_config(config: &InflectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tables = LexicalTables::with_extensions(&config.special_cases, &config.categories);
        Ok(Self::with_tables(
            tables,
            config.loanword_policy(),
            config.cache_plurals(),
        ))
    }

    fn with_tables(tables: LexicalTables, policy: LoanwordPolicy, cache_plurals: bool) -> Self {
        let plural_rules = PluralRule::cascade(policy);
        let singular_rules = SingularRule::cascade(policy);

        tracing::debug!(
            policy = ?policy,
            special_cases = tables.special_cases().count(),
            plural_rules = plural_rules.len(),
            cache = cache_plurals,
            "Inflection engine ready"
        );

        Self {
            tables,
            plural_rules,
            singular_rules,
            policy,
            cache: cache_plurals.then(PluralCache::new),
        }
    }

    /// Process-wide engine with the default configuration
    pub fn global() -> &'static Pluralizer {
        static GLOBAL: OnceLock<Pluralizer> = OnceLock::new();
        GLOBAL.get_or_init(Pluralizer::new)
    }

    /// Loanword policy the cascades were built with
    pub fn policy(&self) -> LoanwordPolicy {
        self.policy
    }

    /// Lexical tables, built-in entries plus config extensions
    pub fn tables(&self) -> &LexicalTables {
        &self.tables
    }

    /// Plural cache, when enabled
    pub fn cache(&self) -> Option<&PluralCache> {
        self.cache.as_ref()
    }

    /// Pluralization rules in evaluation order
    pub fn plural_rules(&self) -> &[PluralRule] {
        &self.plural_rules
    }

    /// Convert a singular noun to its plural form
    ///
    /// Never fails: words no rule recognises get the default ending.
    ///
    /// # Examples
    ///
    /// ```
    /// use flertall::core::pluralize::Pluralizer;
    ///
    /// let pluralizer = Pluralizer::new();
    /// assert_eq!(pluralizer.pluralize("bok"), "Bøker");
    /// assert_eq!(pluralizer.pluralize("mann"), "Menn");
    /// assert_eq!(pluralizer.pluralize("barn"), "Barn");
    /// assert_eq!(pluralizer.pluralize("jente"), "Jenter");
    /// ```
    pub fn pluralize(&self, singular: &str) -> String {
        let word = normalize(singular);

        // Empty and single-letter input
        if word.char_len() <= 1 {
            return word.into_string();
        }

        let claimed = self.plural_rules.iter().find_map(|rule| {
            rule.apply(&word, &self.tables).inspect(|plural| {
                tracing::trace!(word = %word, plural = %plural, rule = ?rule, "Pluralized");
            })
        });

        let plural = match claimed {
            Some(plural) => plural,
            // The cache only stands in for the default ending, never for a rule
            None => {
                if let Some(cache) = &self.cache
                    && cache.contains(word.as_str())
                {
                    tracing::trace!(word = %word, "Already pluralized");
                    return word.into_string();
                }
                let plural = rules::default_plural(&word);
                tracing::trace!(word = %word, plural = %plural, "Pluralized by ending");
                plural
            }
        };

        if let Some(cache) = &self.cache {
            cache.record(&plural);
        }
        plural
    }

    /// Pluralize input that may be absent; `None` stays `None`
    pub fn pluralize_opt(&self, singular: Option<&str>) -> Option<String> {
        singular.map(|s| self.pluralize(s))
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a singular noun to its plural form with the process-wide engine
pub fn pluralize(singular: &str) -> String {
    Pluralizer::global().pluralize(singular)
}
