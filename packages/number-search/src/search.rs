//! Document search service that ties extraction and translation together.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{is_supported_document, validate_directory, validate_file};
use crate::error::Result;
use crate::extract::extract_text;
use crate::numbers::Translator;
use crate::types::{DocumentReport, PageSelection};

/// Find and rewrite the numeral-bearing sentences of one document.
///
/// # Arguments
/// * `path` - Document to search (PDF or plain text)
/// * `pages` - Zero-based page indices, or `None` for the whole document
/// * `translator` - Translator holding the word table and options
///
/// # Returns
/// A `DocumentReport` with the rewritten sentences and any warnings
pub fn search_document(
    path: &Path,
    pages: Option<&PageSelection>,
    translator: &Translator<'_>,
) -> Result<DocumentReport> {
    validate_file(path)?;

    let text = extract_text(path, pages)?;
    let translation = translator.translate_detailed(&text)?;

    tracing::debug!(
        path = %path.display(),
        sentences = translation.sentences.len(),
        "Searched document"
    );

    let mut report = DocumentReport::new(path, pages.cloned());
    report.sentences = translation.sentences;
    report.warnings = translation.warnings;
    Ok(report)
}

/// List the supported documents directly inside a directory.
///
/// Subdirectories are not descended into. Paths are sorted so batch output
/// is deterministic.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_directory(dir)?;

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_document(&path) {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

/// Search every supported document in a directory.
///
/// Whole documents are always searched. Stops at the first document that
/// fails.
pub fn search_directory(dir: &Path, translator: &Translator<'_>) -> Result<Vec<DocumentReport>> {
    list_documents(dir)?
        .iter()
        .map(|path| search_document(path, None, translator))
        .collect()
}
