//! Intent catalog: normalized question -> intent -> answer.
//!
//! Built once from an ordered phrase list and read-only afterwards, so a
//! single instance can be shared across threads without locking. When two
//! questions normalize to the same key, the later entry wins.

use crate::error::TriageError;
use crate::normalizer::normalize;
use crate::phrases::{builtin_phrases, PhraseEntry};
use crate::FALLBACK_ANSWER;
use std::collections::HashMap;
use tracing::{debug, info};

/// Intent identifier: 1-based position of a phrase entry in load order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntentId(usize);

impl IntentId {
    /// 1-based position in the phrase list
    pub fn position(self) -> usize {
        self.0
    }

    fn index(self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for IntentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "intent_{}", self.0)
    }
}

/// Successful resolution of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch<'a> {
    pub intent: IntentId,
    /// Normalized key the message matched on
    pub key: String,
    pub answer: &'a str,
}

#[derive(Debug, Clone)]
pub struct IntentCatalog {
    entries: Vec<PhraseEntry>,
    intents: HashMap<String, IntentId>,
}

impl IntentCatalog {
    /// Build the catalog from phrase entries in load order.
    ///
    /// Fails on an empty list, or on an entry with a blank question or answer.
    pub fn load(entries: Vec<PhraseEntry>) -> Result<Self, TriageError> {
        if entries.is_empty() {
            return Err(TriageError::EmptyCatalog);
        }

        let mut intents = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let intent = IntentId(i + 1);
            if entry.answer.trim().is_empty() {
                return Err(TriageError::EmptyAnswer {
                    position: intent.position(),
                });
            }

            let key = normalize(&entry.question);
            if key.is_empty() {
                return Err(TriageError::EmptyQuestion {
                    position: intent.position(),
                });
            }

            if let Some(previous) = intents.insert(key.clone(), intent) {
                debug!("{} replaces {} for key {:?}", intent, previous, key);
            }
        }

        info!(
            "Catalog loaded: {} intents, {} distinct keys",
            entries.len(),
            intents.len()
        );
        Ok(Self { entries, intents })
    }

    /// Catalog over the built-in symptom phrases
    pub fn builtin() -> Result<Self, TriageError> {
        Self::load(builtin_phrases())
    }

    /// Resolve a message to its intent and answer, if any entry matches.
    pub fn lookup(&self, message: &str) -> Option<IntentMatch<'_>> {
        let key = normalize(message);
        let intent = *self.intents.get(&key)?;
        let entry = self.entries.get(intent.index())?;
        Some(IntentMatch {
            intent,
            key,
            answer: &entry.answer,
        })
    }

    /// Answer for a message, or [`FALLBACK_ANSWER`] when nothing matches.
    pub fn resolve(&self, message: &str) -> &str {
        match self.lookup(message) {
            Some(found) => {
                debug!("Resolved {:?} to {} via key {:?}", message, found.intent, found.key);
                found.answer
            }
            None => {
                debug!("No intent for {:?}", message);
                FALLBACK_ANSWER
            }
        }
    }

    /// Phrase entries with their intent ids, in load order
    pub fn iter(&self) -> impl Iterator<Item = (IntentId, &PhraseEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (IntentId(i + 1), entry))
    }

    /// Number of loaded phrase entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct normalized keys (less than `len` when keys collide)
    pub fn key_count(&self) -> usize {
        self.intents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_id_display() {
        assert_eq!(IntentId(3).to_string(), "intent_3");
        assert_eq!(IntentId(3).position(), 3);
    }

    #[test]
    fn test_lookup_reports_intent() {
        let catalog = IntentCatalog::builtin().unwrap();
        let found = catalog.lookup("headaches").unwrap();
        assert_eq!(found.intent.position(), 2);
        assert_eq!(found.key, "headach");
    }

    #[test]
    fn test_iter_in_load_order() {
        let catalog = IntentCatalog::builtin().unwrap();
        let ids: Vec<usize> = catalog.iter().map(|(id, _)| id.position()).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!(matches!(
            IntentCatalog::load(vec![]),
            Err(TriageError::EmptyCatalog)
        ));
    }
}
