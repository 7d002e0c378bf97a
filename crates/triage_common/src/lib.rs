//! Shared types for the triage assistant.
//!
//! Text normalization, the Porter stemmer behind it, and the intent catalog
//! that maps a normalized question to its canned answer.

pub mod catalog;
pub mod error;
pub mod normalizer;
pub mod phrases;
pub mod stemmer;

pub use catalog::{IntentCatalog, IntentId, IntentMatch};
pub use error::TriageError;
pub use normalizer::{normalize, Language};
pub use phrases::{builtin_phrases, load_phrase_file, PhraseEntry, PhraseFile};

/// Answer returned when no catalog entry matches the input
pub const FALLBACK_ANSWER: &str = "Sorry, I don't";

/// Default listen address for triaged
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Config file path
pub const CONFIG_PATH: &str = "/etc/triage/config.toml";
