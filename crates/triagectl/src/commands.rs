//! Command implementations for triagectl

use crate::client;
use anyhow::Result;
use std::path::Path;
use triage_common::{builtin_phrases, load_phrase_file, normalize as normalize_text, IntentCatalog};

fn load_catalog(phrases: Option<&Path>) -> Result<IntentCatalog> {
    let entries = match phrases {
        Some(path) => load_phrase_file(path)?,
        None => builtin_phrases(),
    };
    Ok(IntentCatalog::load(entries)?)
}

/// Ask the daemon
pub async fn ask(url: &str, message: &str) -> Result<()> {
    let answer = client::ask(url, message).await?;
    println!("{}", answer);
    Ok(())
}

/// Resolve locally
pub fn resolve(message: &str, phrases: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(phrases)?;
    println!("{}", catalog.resolve(message));
    Ok(())
}

pub fn normalize(text: &str) {
    println!("{}", normalize_text(text));
}

/// List the catalog
pub fn phrases(phrases: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(phrases)?;
    for (intent, entry) in catalog.iter() {
        println!(
            "{:<10} {:<30} [{}]",
            intent.to_string(),
            entry.question,
            normalize_text(&entry.question)
        );
        println!("{:<10} -> {}", "", entry.answer);
    }
    println!();
    println!(
        "{} phrases, {} distinct keys",
        catalog.len(),
        catalog.key_count()
    );
    Ok(())
}
