//! Canonical casing for words before lookup and output
//!
//! Every inflection starts here: the word is trimmed, its first character is
//! upper-cased and the rest lower-cased. Lookups then compare against the
//! folded (fully lower-cased) form.

use std::fmt;

/// A word in canonical form, together with its lower-cased fold
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedWord {
    text: String,
    folded: String,
}

impl NormalizedWord {
    /// The canonical text ("Bok", "Jente", "Å")
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lower-cased form used for case-insensitive table lookups
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// True for the empty word
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Suffix test on the canonical text
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }

    /// Text with the last `n` characters removed
    pub fn drop_last(&self, n: usize) -> &str {
        match self.text.char_indices().rev().nth(n.saturating_sub(1)) {
            Some((idx, _)) if n > 0 => &self.text[..idx],
            _ if n == 0 => &self.text,
            _ => "",
        }
    }

    /// Consume the word, keeping the canonical text
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NormalizedWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<NormalizedWord> for String {
    fn from(word: NormalizedWord) -> Self {
        word.text
    }
}

/// Normalize a raw word
///
/// # Examples
///
/// ```
/// use flertall::core::normalize::normalize;
///
/// assert_eq!(normalize("  bOK ").as_str(), "Bok");
/// assert_eq!(normalize("å").as_str(), "Å");
/// assert_eq!(normalize("").as_str(), "");
/// ```
pub fn normalize(word: &str) -> NormalizedWord {
    let trimmed = word.trim();
    let mut chars = trimmed.chars();

    let text = match (chars.next(), chars.as_str()) {
        (None, _) => String::new(),
        (Some(first), "") => upper(first).to_string(),
        (Some(first), rest) => {
            let mut text = String::with_capacity(trimmed.len());
            text.push(upper(first));
            text.push_str(&rest.to_lowercase());
            text
        }
    };

    let folded = text.to_lowercase();
    NormalizedWord { text, folded }
}

/// Normalize input that may be absent; `None` stays `None`
pub fn normalize_opt(word: Option<&str>) -> Option<NormalizedWord> {
    word.map(normalize)
}

/// Upper-case a single character, keeping it when the mapping would expand
/// into several characters ('ß' → "SS")
fn upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
