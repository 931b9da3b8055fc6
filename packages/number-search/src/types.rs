//! Core data types for document search.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// A non-empty set of zero-based page indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u32>", try_from = "Vec<u32>")]
pub struct PageSelection {
    indices: BTreeSet<u32>,
}

impl PageSelection {
    /// Create a selection from page indices.
    ///
    /// Duplicates collapse; an empty selection is rejected because it would
    /// silently mean "no pages" rather than "all pages".
    ///
    /// # Examples
    /// ```
    /// use number_search::types::PageSelection;
    ///
    /// let pages = PageSelection::new([3, 0, 3]).unwrap();
    /// assert_eq!(pages.to_vec(), vec![0, 3]);
    /// assert!(PageSelection::new([]).is_err());
    /// ```
    pub fn new(indices: impl IntoIterator<Item = u32>) -> Result<Self> {
        let indices: BTreeSet<u32> = indices.into_iter().collect();
        if indices.is_empty() {
            return Err(SearchError::InvalidInput(
                "page selection must name at least one page".to_string(),
            ));
        }
        Ok(Self { indices })
    }

    /// Whether the zero-based page index is selected.
    #[must_use]
    pub fn contains(&self, index: u32) -> bool {
        self.indices.contains(&index)
    }

    /// Iterate over the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// Number of selected pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Never true for a constructed selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices as a sorted vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl From<PageSelection> for Vec<u32> {
    fn from(pages: PageSelection) -> Self {
        pages.to_vec()
    }
}

impl TryFrom<Vec<u32>> for PageSelection {
    type Error = SearchError;

    fn try_from(indices: Vec<u32>) -> Result<Self> {
        Self::new(indices)
    }
}

/// Numeral-bearing sentences found in one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    /// Path of the source document.
    pub source: PathBuf,

    /// Pages that were searched; `None` means the whole document.
    pub pages: Option<PageSelection>,

    /// Rewritten sentences in document order.
    pub sentences: Vec<String>,

    /// Non-fatal problems found while processing.
    pub warnings: Vec<String>,
}

impl DocumentReport {
    /// Create an empty report for a document.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, pages: Option<PageSelection>) -> Self {
        Self {
            source: source.into(),
            pages,
            sentences: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Number of rewritten sentences.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_selection_sorted_and_deduplicated() {
        let pages = PageSelection::new([5, 1, 5, 2]).unwrap();
        assert_eq!(pages.to_vec(), vec![1, 2, 5]);
        assert_eq!(pages.len(), 3);
        assert!(pages.contains(2));
        assert!(!pages.contains(3));
    }

    #[test]
    fn test_page_selection_rejects_empty() {
        assert!(matches!(
            PageSelection::new(Vec::new()),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_page_selection_conversions() {
        let pages = PageSelection::try_from(vec![4, 0]).unwrap();
        let back: Vec<u32> = pages.into();
        assert_eq!(back, vec![0, 4]);
    }

    #[test]
    fn test_document_report_new() {
        let report = DocumentReport::new("docs/a.pdf", None);
        assert_eq!(report.source, PathBuf::from("docs/a.pdf"));
        assert_eq!(report.sentence_count(), 0);
        assert!(report.warnings.is_empty());
    }
}
