//! Configuration constants and validation functions.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SearchError};
use crate::types::PageSelection;

/// File extensions (lowercase) that can be converted to text.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt"];

/// Suffix inserted before the format extension of saved reports.
pub const REPORT_SUFFIX: &str = "numbers";

/// Separator between pages in plain-text documents.
pub const PAGE_BREAK: char = '\x0c';

/// Upper bound for a single page range, to keep typos like `0-99999999` cheap.
pub const MAX_PAGE_RANGE: u32 = 100_000;

/// Page list: comma separated indices or inclusive ranges.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PAGE_LIST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:-\d+)?(?:,\d+(?:-\d+)?)*$").expect("valid regex")
});

/// Parse a page list such as `0,2,4-6` into a [`PageSelection`].
///
/// Indices are zero-based. Whitespace around items is ignored.
///
/// # Examples
/// ```
/// use number_search::config::parse_pages;
///
/// assert_eq!(parse_pages("0,2,4-6").unwrap().to_vec(), vec![0, 2, 4, 5, 6]);
/// assert!(parse_pages("two").is_err());
/// assert!(parse_pages("5-3").is_err());
/// ```
pub fn parse_pages(spec: &str) -> Result<PageSelection> {
    let compact: String = spec.chars().filter(|c| !c.is_whitespace()).collect();
    if !PAGE_LIST_PATTERN.is_match(&compact) {
        return Err(SearchError::InvalidPages(spec.to_string()));
    }

    let mut indices = Vec::new();
    for item in compact.split(',') {
        let (first, last) = match item.split_once('-') {
            Some((first, last)) => (parse_index(first, spec)?, parse_index(last, spec)?),
            None => {
                let index = parse_index(item, spec)?;
                (index, index)
            }
        };
        if first > last || last - first > MAX_PAGE_RANGE {
            return Err(SearchError::InvalidPages(spec.to_string()));
        }
        indices.extend(first..=last);
    }

    PageSelection::new(indices)
}

fn parse_index(text: &str, spec: &str) -> Result<u32> {
    text.parse()
        .map_err(|_| SearchError::InvalidPages(spec.to_string()))
}

/// Lowercase extension of a path, if any.
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// Whether a path has one of the [`SUPPORTED_EXTENSIONS`].
#[must_use]
pub fn is_supported_document(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Check that a path exists and is a directory.
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SearchError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory does not exist: {}", path.display()),
        )));
    }
    if !path.is_dir() {
        return Err(SearchError::InvalidInput(format!(
            "Not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Check that a path exists and is a regular file.
pub fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SearchError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File does not exist: {}", path.display()),
        )));
    }
    if !path.is_file() {
        return Err(SearchError::InvalidInput(format!(
            "Not a file: {}",
            path.display()
        )));
    }
    Ok(())
}
