//! Ordered rule cascades for both inflection directions
//!
//! Each cascade is a list of tagged matchers evaluated top to bottom. A rule
//! returns `Some(form)` when it fires and `None` to let the next rule try, so
//! priority between overlapping categories is the position in the list.

use crate::config::LoanwordPolicy;
use crate::core::normalize::{NormalizedWord, normalize};
use crate::core::tables::{
    Category, LexicalTables, irregular_singular, kinship_plural, vowel_to_ae_plural,
};

/// One step of the pluralization cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// Explicit special-case table
    SpecialCase,
    /// Borrowed noun taking "-s" (regular-loanword policy only)
    RegularLoanword,
    /// Vowel becomes "æ", then "-r"
    VowelToAe,
    /// Units and currencies stay unchanged
    InvariantUnit,
    /// Closed kinship table; unlisted members fall through
    Kinship,
    /// "-eum" → "-eer", "-ium" → "-ier"
    NeutralEumIum,
    /// One-syllable neuter nouns stay unchanged
    NeutralOneSyllable,
    /// "a"/"å" → "e", then "-er"
    FemaleVowelShift,
    /// "o" → "ø", then an ending depending on the stem
    MaleVowelShift,
    /// Identical in singular and plural
    NonEnding,
}

impl PluralRule {
    /// Cascade order for the given loanword policy
    pub fn cascade(policy: LoanwordPolicy) -> Vec<PluralRule> {
        let mut rules = vec![PluralRule::SpecialCase];
        if policy == LoanwordPolicy::RegularLoanword {
            rules.push(PluralRule::RegularLoanword);
        }
        rules.extend([
            PluralRule::VowelToAe,
            PluralRule::InvariantUnit,
            PluralRule::Kinship,
            PluralRule::NeutralEumIum,
            PluralRule::NeutralOneSyllable,
            PluralRule::FemaleVowelShift,
            PluralRule::MaleVowelShift,
            PluralRule::NonEnding,
        ]);
        rules
    }

    /// Result of this rule, or `None` to fall through to the next one
    pub fn apply(&self, word: &NormalizedWord, tables: &LexicalTables) -> Option<String> {
        let text = word.as_str();
        match self {
            PluralRule::SpecialCase => tables.special_case_for(word).map(str::to_string),

            PluralRule::RegularLoanword => tables
                .contains(Category::Loanword, word)
                .then(|| format!("{}s", text)),

            PluralRule::VowelToAe => {
                if !tables.contains(Category::VowelToAe, word) {
                    return None;
                }
                let plural = match vowel_to_ae_plural(word.folded()) {
                    Some(irregular) => irregular.to_string(),
                    None => format!("{}r", text.replace('å', "æ").replace('e', "æ")),
                };
                Some(plural)
            }

            PluralRule::InvariantUnit => tables
                .contains(Category::Unit, word)
                .then(|| text.to_string()),

            PluralRule::Kinship => {
                if !tables.contains(Category::Kinship, word) {
                    return None;
                }
                kinship_plural(word.folded()).map(str::to_string)
            }

            PluralRule::NeutralEumIum => {
                if !tables.contains(Category::NeutralEumIum, word) {
                    return None;
                }
                if word.ends_with("eum") {
                    Some(format!("{}eer", word.drop_last(3)))
                } else if word.ends_with("ium") {
                    Some(format!("{}ier", word.drop_last(3)))
                } else {
                    None
                }
            }

            PluralRule::NeutralOneSyllable => tables
                .contains(Category::NeutralOneSyllable, word)
                .then(|| text.to_string()),

            PluralRule::FemaleVowelShift => {
                if !tables.contains(Category::FemaleVowelShift, word) {
                    return None;
                }
                let shifted = word.folded().replace('å', "e").replace('a', "e");
                Some(normalize(&format!("{}er", shifted)).into_string())
            }

            PluralRule::MaleVowelShift => {
                if !tables.contains(Category::MaleVowelShift, word) {
                    return None;
                }
                let stem = normalize(&text.replace('o', "ø"));
                let plural = if stem.folded() == "føt" {
                    format!("{}ter", stem)
                } else if stem.ends_with("e") {
                    format!("{}r", stem)
                } else if !stem.ends_with("er") {
                    format!("{}er", stem)
                } else {
                    stem.into_string()
                };
                Some(plural)
            }

            PluralRule::NonEnding => tables
                .contains(Category::NonEnding, word)
                .then(|| text.to_string()),
        }
    }
}

/// Plural for a word no category claimed, chosen by its ending
pub fn default_plural(word: &NormalizedWord) -> String {
    let text = word.as_str();
    if word.ends_with("er") {
        format!("{}ere", word.drop_last(2))
    } else if word.ends_with("el") {
        format!("{}ler", word.drop_last(2))
    } else if word.ends_with("e") {
        format!("{}r", text)
    } else {
        // "-en" and every other ending both take "-er"
        format!("{}er", text)
    }
}

/// One step of the singularization cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularRule {
    /// Reverse scan of the special-case table
    ReverseSpecialCase,
    /// "-s" plural of a borrowed noun (regular-loanword policy only)
    RegularLoanword,
    /// Non-ending, one-syllable neuter and unit words stay unchanged
    Invariant,
    /// Hardcoded irregular plural → singular pairs
    IrregularPlural,
    /// Ordered suffix stripping
    Suffix,
}

/// Suffixes stripped by [`SingularRule::Suffix`] and how many characters
/// each removes; the first matching suffix wins
pub const SINGULAR_SUFFIXES: &[(&str, usize)] = &[
    ("ler", 2),
    ("ter", 1),
    ("ere", 1),
    ("er", 2),
    ("r", 1),
];

impl SingularRule {
    /// Cascade order for the given loanword policy
    pub fn cascade(policy: LoanwordPolicy) -> Vec<SingularRule> {
        let mut rules = vec![SingularRule::ReverseSpecialCase];
        if policy == LoanwordPolicy::RegularLoanword {
            rules.push(SingularRule::RegularLoanword);
        }
        rules.extend([
            SingularRule::Invariant,
            SingularRule::IrregularPlural,
            SingularRule::Suffix,
        ]);
        rules
    }

    /// Result of this rule, or `None` to fall through to the next one
    pub fn apply(&self, word: &NormalizedWord, tables: &LexicalTables) -> Option<String> {
        match self {
            SingularRule::ReverseSpecialCase => {
                tables.reverse_special_case_for(word).map(str::to_string)
            }

            SingularRule::RegularLoanword => {
                if !word.ends_with("s") {
                    return None;
                }
                let stem = normalize(word.drop_last(1));
                tables
                    .contains(Category::Loanword, &stem)
                    .then(|| stem.into_string())
            }

            SingularRule::Invariant => {
                let invariant = [
                    Category::NonEnding,
                    Category::NeutralOneSyllable,
                    Category::Unit,
                ]
                .into_iter()
                .any(|category| tables.contains(category, word));
                invariant.then(|| word.as_str().to_string())
            }

            SingularRule::IrregularPlural => {
                irregular_singular(word).map(str::to_string)
            }

            SingularRule::Suffix => SINGULAR_SUFFIXES
                .iter()
                .find(|(suffix, _)| word.ends_with(suffix))
                .map(|(_, strip)| word.drop_last(*strip).to_string()),
        }
    }
}
