//! Error types for number search.
//!
//! `SearchError` is the single error type surfaced to library consumers.
//! Tolerated anomalies (such as a malformed scale suffix after a digit
//! literal) are not errors; see [`crate::numbers::ScaleWarning`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the number search library.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A word inside a word-anchored numeral span is not a number word.
    #[error("Unknown number word '{word}'{}", .sentence.as_ref().map(|s| format!(" in sentence \"{s}\"")).unwrap_or_default())]
    UnknownNumberWord {
        word: String,
        sentence: Option<String>,
    },

    /// The caller supplied input the library cannot work with.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Page selection could not be parsed.
    #[error("Invalid page selection: '{0}'. Expected zero-based indices like 0,2,4-6")]
    InvalidPages(String),

    /// No text extractor exists for this kind of file.
    #[error("Unsupported document type: {}", .0.display())]
    UnsupportedDocument(PathBuf),

    /// A PDF could not be loaded or its text could not be extracted.
    #[error("Failed to read document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// Some documents of a directory run failed; the rest were searched.
    #[error("{failed} of {total} documents could not be searched")]
    BatchFailed { failed: usize, total: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl SearchError {
    /// Attach the sentence an unknown number word was found in.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_sentence(self, context: &str) -> Self {
        match self {
            Self::UnknownNumberWord { word, sentence: None } => Self::UnknownNumberWord {
                word,
                sentence: Some(context.trim().to_string()),
            },
            other => other,
        }
    }
}

/// Result type alias for number search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
