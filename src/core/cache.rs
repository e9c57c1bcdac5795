//! Append-only record of plurals an engine has produced
//!
//! Used only to short-circuit pluralizing a word that is already one of this
//! engine's plurals. Entries are never removed.

use std::collections::HashSet;
use std::sync::RwLock;

/// Thread-safe set of produced plurals, compared case-insensitively
#[derive(Debug, Default)]
pub struct PluralCache {
    plurals: RwLock<HashSet<String>>,
}

impl PluralCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `word` was recorded before
    ///
    /// A poisoned lock is reported and treated as a miss.
    pub fn contains(&self, word: &str) -> bool {
        match self.plurals.read() {
            Ok(plurals) => plurals.contains(&word.to_lowercase()),
            Err(e) => {
                tracing::warn!(error = %e, "Plural cache lock poisoned, skipping lookup");
                false
            }
        }
    }

    /// Record a produced plural
    pub fn record(&self, plural: &str) {
        match self.plurals.write() {
            Ok(mut plurals) => {
                plurals.insert(plural.to_lowercase());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Plural cache lock poisoned, dropping entry");
            }
        }
    }

    /// Number of recorded plurals; zero if the lock is poisoned
    pub fn len(&self) -> usize {
        self.plurals.read().map(|p| p.len()).unwrap_or(0)
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_record_and_contains() {
        let cache = PluralCache::new();
        assert!(cache.is_empty());

        cache.record("Bøker");
        assert!(cache.contains("Bøker"));
        assert!(cache.contains("BØKER"));
        assert!(!cache.contains("Bok"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_record_is_idempotent() {
        let cache = PluralCache::new();
        cache.record("Menn");
        cache.record("menn");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_writers() {
        let cache = Arc::new(PluralCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for j in 0..50 {
                        cache.record(&format!("Ord{}x{}", i, j));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 400);
    }
}
