//! Document-to-text conversion.
//!
//! Extractors turn a file, optionally restricted to some pages, into one
//! string of plain text. Page indices are zero-based throughout.

use std::fs;
use std::path::Path;

use lopdf::Document;
use unicode_normalization::UnicodeNormalization;

use crate::config::{extension_of, PAGE_BREAK};
use crate::error::{Result, SearchError};
use crate::types::PageSelection;

/// Trait for document-to-text conversion.
pub trait TextExtractor {
    /// Return the text of the selected pages, or of the whole document
    /// when `pages` is `None`.
    fn extract(&self, path: &Path, pages: Option<&PageSelection>) -> Result<String>;
}

/// Extracts text from PDF files.
///
/// Text is NFKC-normalized so ligatures, non-breaking spaces and full-width
/// digits come out as their plain equivalents.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path, pages: Option<&PageSelection>) -> Result<String> {
        let document = Document::load(path).map_err(|source| SearchError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;

        // lopdf numbers pages from 1
        let available: Vec<u32> = document.get_pages().keys().copied().collect();
        let page_numbers: Vec<u32> = match pages {
            Some(selection) => {
                warn_missing_pages(
                    path,
                    selection,
                    |index| {
                        index
                            .checked_add(1)
                            .is_some_and(|number| available.contains(&number))
                    },
                    available.len(),
                );
                available
                    .iter()
                    .copied()
                    .filter(|number| {
                        number
                            .checked_sub(1)
                            .is_some_and(|index| selection.contains(index))
                    })
                    .collect()
            }
            None => available,
        };

        let mut texts = Vec::with_capacity(page_numbers.len());
        for number in &page_numbers {
            let text = document
                .extract_text(&[*number])
                .map_err(|source| SearchError::DocumentRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            texts.push(text);
        }

        tracing::debug!(
            path = %path.display(),
            pages = page_numbers.len(),
            "Extracted PDF text"
        );
        Ok(texts.join("\n").nfkc().collect())
    }
}

/// Reads UTF-8 text files. Pages are separated by form feeds.
///
/// Text is NFKC-normalized like [`PdfExtractor`] output.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path, pages: Option<&PageSelection>) -> Result<String> {
        let text = fs::read_to_string(path)?;

        if let Some(selection) = pages {
            let page_count = text.split(PAGE_BREAK).count();
            warn_missing_pages(
                path,
                selection,
                |index| (index as usize) < page_count,
                page_count,
            );
        }

        Ok(select_pages(&text, pages).nfkc().collect())
    }
}

/// Log every selected page index that the document does not have.
fn warn_missing_pages(
    path: &Path,
    selection: &PageSelection,
    exists: impl Fn(u32) -> bool,
    page_count: usize,
) {
    for index in selection.iter().filter(|index| !exists(*index)) {
        tracing::warn!(
            page = index,
            pages = page_count,
            path = %path.display(),
            "Requested page does not exist, ignoring"
        );
    }
}

/// Keep the selected form-feed separated pages of `text`, joined by newlines.
fn select_pages(text: &str, pages: Option<&PageSelection>) -> String {
    let Some(selection) = pages else {
        return text.to_string();
    };

    text.split(PAGE_BREAK)
        .zip(0u32..)
        .filter(|(_, index)| selection.contains(*index))
        .map(|(page, _)| page)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Choose an extractor by file extension.
pub fn extractor_for(path: &Path) -> Result<Box<dyn TextExtractor>> {
    match extension_of(path).as_deref() {
        Some("pdf") => Ok(Box::new(PdfExtractor)),
        Some("txt") => Ok(Box::new(PlainTextExtractor)),
        _ => Err(SearchError::UnsupportedDocument(path.to_path_buf())),
    }
}

/// Extract text from any supported document.
///
/// # Arguments
/// * `path` - Document to read
/// * `pages` - Zero-based page indices to keep, or `None` for all pages
pub fn extract_text(path: &Path, pages: Option<&PageSelection>) -> Result<String> {
    extractor_for(path)?.extract(path, pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_select_pages_all() {
        assert_eq!(select_pages("a\x0cb", None), "a\x0cb");
    }

    #[test]
    fn test_select_pages_subset() {
        let pages = PageSelection::new([0, 2]).unwrap();
        assert_eq!(select_pages("first\x0csecond\x0cthird", Some(&pages)), "first\nthird");
    }

    #[test]
    fn test_select_pages_out_of_range() {
        let pages = PageSelection::new([5]).unwrap();
        assert_eq!(select_pages("only page", Some(&pages)), "");
    }

    #[test]
    fn test_extractor_for_extensions() {
        assert!(extractor_for(Path::new("a.pdf")).is_ok());
        assert!(extractor_for(Path::new("a.TXT")).is_ok());
        assert!(matches!(
            extractor_for(Path::new("a.docx")),
            Err(SearchError::UnsupportedDocument(_))
        ));
        assert!(extractor_for(Path::new("noext")).is_err());
    }

    #[test]
    fn test_plain_text_extraction() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "Page one has two cats.\x0cPage two has 3 dogs.").unwrap();

        let whole = extract_text(&path, None).unwrap();
        assert!(whole.contains("two cats"));
        assert!(whole.contains("3 dogs"));

        let second = extract_text(&path, Some(&PageSelection::new([1]).unwrap())).unwrap();
        assert_eq!(second, "Page two has 3 dogs.");
    }

    #[test]
    fn test_plain_text_missing_page_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "first\x0csecond").unwrap();

        let pages = PageSelection::new([1, 7]).unwrap();
        assert_eq!(extract_text(&path, Some(&pages)).unwrap(), "second");

        let beyond = PageSelection::new([7]).unwrap();
        assert_eq!(extract_text(&path, Some(&beyond)).unwrap(), "");
    }

    #[test]
    fn test_plain_text_is_nfkc_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "We saw \u{FB01}ve cats and \u{FF11}\u{FF12} dogs").unwrap();

        assert_eq!(
            extract_text(&path, None).unwrap(),
            "We saw five cats and 12 dogs"
        );
    }

    #[test]
    fn test_missing_text_file_is_io_error() {
        let result = extract_text(Path::new("no/such/file.txt"), None);
        assert!(matches!(result, Err(SearchError::Io(_))));
    }

    #[test]
    fn test_malformed_pdf_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, "this is not a pdf").unwrap();

        let result = extract_text(&path, None);
        assert!(matches!(result, Err(SearchError::DocumentRead { .. })));
    }
}
