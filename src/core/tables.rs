//! Lexical reference data for the inflection cascades
//!
//! The tables are plain data: a special-case map, the category sets each
//! rule consults, and two closed per-word tables (kinship plurals and
//! irregular plural → singular pairs). They are built once per engine and
//! never mutated afterwards.
//!
//! Rules for the Norwegian plural follow the main rules described at
//! <https://toppnorsk.com/2018/11/18/flertall-hovedregler/>.

use crate::core::normalize::{NormalizedWord, normalize};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Inflection class a word can belong to
///
/// A word may legally be a member of several categories; which rule wins is
/// decided by the cascade order, not by the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Vowel becomes "æ" in the plural (tre → trær)
    VowelToAe,
    /// Units and currencies, invariant in the plural (meter → meter)
    Unit,
    /// Kinship terms (far → fedre)
    Kinship,
    /// Neuter nouns in -eum/-ium (museum → museer)
    NeutralEumIum,
    /// One-syllable neuter nouns without plural ending (hus → hus)
    NeutralOneSyllable,
    /// Feminine nouns with vowel shift (natt → netter)
    FemaleVowelShift,
    /// Masculine nouns with vowel shift (bok → bøker)
    MaleVowelShift,
    /// Nouns identical in singular and plural (ski → ski)
    NonEnding,
    /// Borrowed nouns that take "-s" under the regular-loanword policy
    Loanword,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::VowelToAe,
        Category::Unit,
        Category::Kinship,
        Category::NeutralEumIum,
        Category::NeutralOneSyllable,
        Category::FemaleVowelShift,
        Category::MaleVowelShift,
        Category::NonEnding,
        Category::Loanword,
    ];

    /// Built-in members of this category
    pub fn builtin_words(self) -> &'static [&'static str] {
        match self {
            Category::VowelToAe => &["håndkle", "kne", "tre", "tå"],
            Category::Unit => &[
                "meter",
                "centimeter",
                "millimeter",
                "kilometer",
                "gram",
                "kilogram",
                "tonn",
                "liter",
                "desiliter",
                "centiliter",
                "dollar",
                "lire",
                "pesetas",
                "euro",
                "yen",
                "franc",
                "pund",
                "rupee",
                "ringgit",
                "peso",
                "real",
                "won",
                "yuan",
            ],
            Category::Kinship => &[
                "far",
                "mor",
                "datter",
                "fetter",
                "onkel",
                "bror",
                "svigerbror",
                "svigerfar",
                "svigermor",
                "svigersøster",
                "søster",
                "tante",
                "nevø",
            ],
            Category::NeutralEumIum => &["museum", "jubileum", "kjemikalium"],
            Category::NeutralOneSyllable => &["hus", "fjell", "blad"],
            Category::FemaleVowelShift => &[
                "and", "hand", "hånd", "natt", "stang", "strand", "tang", "tann",
            ],
            Category::MaleVowelShift => &["bonde", "fot", "bok", "bot", "rot"],
            Category::NonEnding => &["mus", "sko", "ski", "feil", "ting"],
            Category::Loanword => &["meter", "ting"],
        }
    }

    /// Config key for the category (`vowel_to_ae`, `unit`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Category::VowelToAe => "vowel_to_ae",
            Category::Unit => "unit",
            Category::Kinship => "kinship",
            Category::NeutralEumIum => "neutral_eum_ium",
            Category::NeutralOneSyllable => "neutral_one_syllable",
            Category::FemaleVowelShift => "female_vowel_shift",
            Category::MaleVowelShift => "male_vowel_shift",
            Category::NonEnding => "non_ending",
            Category::Loanword => "loanword",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in special cases, in lookup order
const SPECIAL_CASES: &[(&str, &str)] = &[("Mann", "Menn"), ("Barn", "Barn"), ("Øye", "Øyne")];

/// Plural → singular pairs that cannot be recovered by stripping a suffix
///
/// Every plural here is exactly what the pluralization cascade produces for
/// its singular.
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("Bøker", "Bok"),
    ("Føtter", "Fot"),
    ("Brødre", "Bror"),
    ("Menn", "Mann"),
    ("Kvinner", "Kvinne"),
    ("Gutter", "Gutt"),
    ("Netter", "Natt"),
    ("Tær", "Tå"),
    ("Tenner", "Tann"),
    ("Trær", "Tre"),
    ("Knær", "Kne"),
    ("Bønder", "Bonde"),
    ("Hender", "Hand"),
    ("Døtre", "Datter"),
    ("Fedre", "Far"),
    ("Mødre", "Mor"),
    ("Søstre", "Søster"),
    ("Øyne", "Øye"),
    ("Håndklær", "Håndkle"),
    ("Bøter", "Bot"),
    ("Røter", "Rot"),
    ("Ender", "And"),
    ("Stenger", "Stang"),
    ("Strender", "Strand"),
    ("Tenger", "Tang"),
    ("Onkler", "Onkel"),
    ("Fettere", "Fetter"),
    ("Svigerbrødre", "Svigerbror"),
    ("Svigerfedre", "Svigerfar"),
    ("Svigermødre", "Svigermor"),
    ("Svigersøstre", "Svigersøster"),
    ("Museer", "Museum"),
    ("Jubileer", "Jubileum"),
    ("Kjemikalier", "Kjemikalium"),
];

/// Irregular kinship plurals, keyed by folded singular
///
/// `None` means the word has no explicit entry and the cascade continues.
pub fn kinship_plural(folded: &str) -> Option<&'static str> {
    match folded {
        "far" => Some("Fedre"),
        "mor" => Some("Mødre"),
        "datter" => Some("Døtre"),
        "søster" => Some("Søstre"),
        "fetter" => Some("Fettere"),
        "onkel" => Some("Onkler"),
        "svigerbror" => Some("Svigerbrødre"),
        "svigerfar" => Some("Svigerfedre"),
        "svigersøster" => Some("Svigersøstre"),
        "svigermor" => Some("Svigermødre"),
        "bror" => Some("Brødre"),
        _ => None,
    }
}

/// Members of the "æ" class whose plural is not derived by substitution
pub fn vowel_to_ae_plural(folded: &str) -> Option<&'static str> {
    match folded {
        "håndkle" => Some("Håndklær"),
        _ => None,
    }
}

/// Singular for a plural listed in [`IRREGULAR_PLURALS`]
///
/// Entries are stored in normalized form, so the canonical text is compared
/// directly.
pub fn irregular_singular(word: &NormalizedWord) -> Option<&'static str> {
    IRREGULAR_PLURALS
        .iter()
        .find(|(plural, _)| *plural == word.as_str())
        .map(|(_, singular)| *singular)
}

/// Immutable set of folded word forms sharing one inflection rule
#[derive(Debug, Clone)]
pub struct CategorySet {
    category: Category,
    words: HashSet<String>,
}

impl CategorySet {
    /// Build a set from arbitrary-case words
    pub fn new<I, S>(category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { category, words }
    }

    /// Category this set belongs to
    pub fn category(&self) -> Category {
        self.category
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &NormalizedWord) -> bool {
        self.words.contains(word.folded())
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set has no members
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Members in folded form, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// All reference data consulted by the cascades
#[derive(Debug, Clone)]
pub struct LexicalTables {
    special_cases: IndexMap<String, String>,
    sets: Vec<CategorySet>,
}

impl LexicalTables {
    /// Tables with the built-in data only
    pub fn builtin() -> Self {
        Self::with_extensions(&IndexMap::new(), &IndexMap::new())
    }

    /// Built-in tables extended with extra special cases and category members
    ///
    /// Extra special cases are normalized on both sides; a key that matches a
    /// built-in entry replaces its plural in place, new keys are appended.
    pub fn with_extensions(
        special_cases: &IndexMap<String, String>,
        categories: &IndexMap<Category, Vec<String>>,
    ) -> Self {
        let mut cases: IndexMap<String, String> = SPECIAL_CASES
            .iter()
            .map(|(singular, plural)| (singular.to_string(), plural.to_string()))
            .collect();
        for (singular, plural) in special_cases {
            cases.insert(
                normalize(singular).into_string(),
                normalize(plural).into_string(),
            );
        }

        let sets = Category::ALL
            .iter()
            .map(|&category| {
                let extra = categories.get(&category).into_iter().flatten();
                let builtin = category.builtin_words().iter().map(|w| w.to_string());
                CategorySet::new(category, builtin.chain(extra.cloned()))
            })
            .collect();

        Self {
            special_cases: cases,
            sets,
        }
    }

    /// Set holding the members of `category`
    pub fn set(&self, category: Category) -> &CategorySet {
        // `sets` is built from `Category::ALL`, one entry per variant, in order
        &self.sets[category as usize]
    }

    /// Whether `word` is a member of `category`
    pub fn contains(&self, category: Category, word: &NormalizedWord) -> bool {
        self.set(category).contains(word)
    }

    /// Whether `word` is an invariant unit or currency
    pub fn in_units(&self, word: &NormalizedWord) -> bool {
        self.contains(Category::Unit, word)
    }

    /// Whether `word` is a special-case singular
    pub fn in_special_cases(&self, word: &NormalizedWord) -> bool {
        self.special_case_for(word).is_some()
    }

    /// Fixed plural for a special-case singular
    pub fn special_case_for(&self, word: &NormalizedWord) -> Option<&str> {
        // Keys are normalized on insert
        self.special_cases.get(word.as_str()).map(String::as_str)
    }

    /// Singular whose special-case plural is `word`, first entry in table order
    pub fn reverse_special_case_for(&self, word: &NormalizedWord) -> Option<&str> {
        self.special_cases
            .iter()
            .find(|(_, plural)| plural.as_str() == word.as_str())
            .map(|(singular, _)| singular.as_str())
    }

    /// Special cases in lookup order
    pub fn special_cases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.special_cases
            .iter()
            .map(|(singular, plural)| (singular.as_str(), plural.as_str()))
    }
}

impl Default for LexicalTables {
    fn default() -> Self {
        Self::builtin()
    }
}
