//! Phrase entries: the (question, answer) pairs the catalog is built from.
//!
//! The built-in symptom list ships with the binary. A TOML phrase file can
//! replace it at startup:
//!
//! ```toml
//! [[phrases]]
//! question = "Headache"
//! answer = "It could be due to stress or a tension headache"
//! ```

use crate::error::TriageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// One recognized question and its canned answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub question: String,
    pub answer: String,
}

impl PhraseEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// On-disk phrase list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseFile {
    #[serde(default)]
    pub phrases: Vec<PhraseEntry>,
}

const BUILTIN: &[(&str, &str)] = &[
    ("Mouth Bitter", "You might have Malaria"),
    ("Headache", "It could be due to stress or a tension headache"),
    ("Cough and Sore Throat", "You may be suffering from a common cold or flu"),
    ("Fever and Body Aches", "It could be a sign of influenza or dengue fever"),
    ("Shortness of Breath", "It could indicate a respiratory infection or asthma"),
    ("Abdominal Pain and Diarrhea", "You may have food poisoning or a stomach virus"),
    ("Joint Pain and Swelling", "It could be a symptom of arthritis or rheumatoid arthritis"),
    ("Fatigue and Weakness", "It may be due to lack of sleep or anemia"),
    ("Hello", "Hi, How may I help you"),
];

/// Built-in symptom phrases, in load order
pub fn builtin_phrases() -> Vec<PhraseEntry> {
    BUILTIN
        .iter()
        .map(|(question, answer)| PhraseEntry::new(*question, *answer))
        .collect()
}

/// Load phrases from a TOML phrase file
pub fn load_phrase_file(path: impl AsRef<Path>) -> Result<Vec<PhraseEntry>, TriageError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TriageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: PhraseFile = toml::from_str(&content).map_err(|source| TriageError::PhraseFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} phrases from {}", file.phrases.len(), path.display());
    Ok(file.phrases)
}
