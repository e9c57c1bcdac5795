//! Singularization of Norwegian nouns

use crate::core::normalize::normalize;
use crate::core::pluralize::Pluralizer;

impl Pluralizer {
    /// Convert a plural noun to its singular form
    ///
    /// # Examples
    ///
    /// ```
    /// use flertall::core::pluralize::Pluralizer;
    ///
    /// let pluralizer = Pluralizer::new();
    /// assert_eq!(pluralizer.singularize("Brødre"), "Bror");
    /// assert_eq!(pluralizer.singularize("menn"), "Mann");
    /// assert_eq!(pluralizer.singularize("jenter"), "Jente");
    /// assert_eq!(pluralizer.singularize("ski"), "Ski");
    /// ```
    pub fn singularize(&self, plural: &str) -> String {
        let word = normalize(plural);

        if word.char_len() <= 1 {
            return word.into_string();
        }

        match self
            .singular_rules
            .iter()
            .find_map(|rule| rule.apply(&word, &self.tables).map(|s| (rule, s)))
        {
            Some((rule, singular)) => {
                tracing::trace!(word = %word, singular = %singular, rule = ?rule, "Singularized");
                singular
            }
            None => word.into_string(),
        }
    }

    /// Singularize input that may be absent; `None` stays `None`
    pub fn singularize_opt(&self, plural: Option<&str>) -> Option<String> {
        plural.map(|p| self.singularize(p))
    }
}

/// Convert a plural noun to its singular form with the process-wide engine
pub fn singularize(plural: &str) -> String {
    Pluralizer::global().singularize(plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InflectorConfig, LoanwordPolicy};

    #[test]
    fn test_singularize_special_cases() {
        let p = Pluralizer::new();
        assert_eq!(p.singularize("Menn"), "Mann");
        assert_eq!(p.singularize("barn"), "Barn");
        assert_eq!(p.singularize("øyne"), "Øye");
    }

    #[test]
    fn test_singularize_invariant_words() {
        let p = Pluralizer::new();
        assert_eq!(p.singularize("sko"), "Sko");
        assert_eq!(p.singularize("hus"), "Hus");
        assert_eq!(p.singularize("kilometer"), "Kilometer");
        assert_eq!(p.singularize("dollar"), "Dollar");
    }

    #[test]
    fn test_singularize_irregulars() {
        let p = Pluralizer::new();
        assert_eq!(p.singularize("Brødre"), "Bror");
        assert_eq!(p.singularize("bøker"), "Bok");
        assert_eq!(p.singularize("føtter"), "Fot");
        assert_eq!(p.singularize("tær"), "Tå");
        assert_eq!(p.singularize("døtre"), "Datter");
        assert_eq!(p.singularize("museer"), "Museum");
    }

    #[test]
    fn test_singularize_suffixes() {
        let p = Pluralizer::new();
        assert_eq!(p.singularize("stoler"), "Stol");
        assert_eq!(p.singularize("jenter"), "Jente");
        assert_eq!(p.singularize("lærere"), "Lærer");
        assert_eq!(p.singularize("biler"), "Bil");
        assert_eq!(p.singularize("vogner"), "Vogn");
        assert_eq!(p.singularize("bil"), "Bil");
    }

    #[test]
    fn test_singularize_degenerate_input() {
        let p = Pluralizer::new();
        assert_eq!(p.singularize(""), "");
        assert_eq!(p.singularize("r"), "R");
        assert_eq!(p.singularize_opt(None), None);
    }

    #[test]
    fn test_singularize_loanwords() {
        let config = InflectorConfig {
            loanword_policy: Some(LoanwordPolicy::RegularLoanword),
            ..Default::default()
        };
        let p = Pluralizer::from_config(&config).unwrap();
        assert_eq!(p.singularize("meters"), "Meter");
        assert_eq!(p.singularize("Tings"), "Ting");
        assert_eq!(p.singularize("meter"), "Meter");

        let default = Pluralizer::new();
        assert_eq!(default.singularize("meters"), "Meters");
    }

    #[test]
    fn test_global_engine() {
        assert_eq!(singularize("gutter"), "Gutt");
    }
}
