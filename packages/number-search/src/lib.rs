//! Number Search - Find numbers written out in words and rewrite them as numerals.
//!
//! This crate locates quantities spelled out in English words ("one hundred
//! and twenty one") and digit literals with scale words or thousands
//! separators ("500 thousand", "1,000") in prose, and rewrites each one as a
//! canonical numeral ("121.0", "500000.0", "1000.0").
//!
//! # Example
//!
//! ```
//! use number_search::translate;
//!
//! let sentences = translate("He has 500 thousand dollars. The sky is blue.").unwrap();
//! assert_eq!(sentences, vec!["he has 500000.0 dollars"]);
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`numbers`]: Sentence splitting, tokenizing, span detection and conversion
//! - [`extract`]: PDF and plain-text document conversion
//! - [`search`]: Single-document and directory search
//! - [`report`]: Text, YAML and JSON report output
//! - [`types`]: Core data types (DocumentReport, PageSelection)
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod numbers;
pub mod report;
pub mod search;
pub mod types;

// Re-export main functions
pub use numbers::translate;
pub use search::{search_directory, search_document};

// Re-export commonly used items
pub use config::parse_pages;
pub use error::{Result, SearchError};
pub use numbers::{NumberWordTable, TranslateOptions, Translator};
pub use types::{DocumentReport, PageSelection};
