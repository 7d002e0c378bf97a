//! Error types for the triage assistant.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Catalog has no phrase entries")]
    EmptyCatalog,

    #[error("Phrase entry {position} has an empty question")]
    EmptyQuestion { position: usize },

    #[error("Phrase entry {position} has an empty answer")]
    EmptyAnswer { position: usize },

    #[error("Failed to read phrase file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid phrase file {path}: {source}")]
    PhraseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
