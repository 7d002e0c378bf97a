//! Text normalization for intent matching.
//!
//! Splits on whitespace, stems every token, and joins the stems with single
//! spaces. Case is folded by the stemmer; punctuation is kept as-is.

use crate::stemmer::stem;
use serde::{Deserialize, Serialize};

/// Languages the normalizer can stem
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "en"),
        }
    }
}

/// Normalize text into its catalog key.
///
/// Total: empty or whitespace-only input gives an empty key.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(stem_to_fixpoint)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single Porter pass can leave a stemmable word behind
/// (agreed -> agree -> agre -> agr), so repeat until the token is stable.
///
/// Every changing pass shortens the token, or keeps its length while
/// turning a `y` into `i` or an `i` into `e`. `3 * len + 2 * ys + is` drops
/// on each such pass, so the loop ends within `5 * len` passes.
fn stem_to_fixpoint(token: &str) -> String {
    let mut current = stem(token);
    let max_passes = 5 * current.chars().count() + 1;
    for _ in 0..max_passes {
        let next = stem(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Cough   and\tSore \n Throat "), "cough and sore throat");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn test_fixpoint() {
        assert_eq!(stem_to_fixpoint("agreed"), "agr");
        assert_eq!(stem_to_fixpoint("headaches"), "headach");
    }

    #[test]
    fn test_fixpoint_long_suffix_chain() {
        let word = format!("relational{}s", "izationalization".repeat(20));
        let once = stem_to_fixpoint(&word);
        assert_eq!(stem(&once), once);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::default(), Language::English);
    }
}
