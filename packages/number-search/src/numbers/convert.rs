//! Conversion of number-word runs to values.

use super::table::NumberWordTable;
use crate::error::{Result, SearchError};

/// Scales above this flush the running group into the result.
const FLUSH_ABOVE_SCALE: u64 = 100;

/// Convert a run of number words to its value.
///
/// Every word must be in `table`; an unknown word is an error rather than
/// being skipped. Within a group, each word applies
/// `current = current * scale + increment`. Scales larger than a hundred
/// close the group and add it to the result, which is how
/// "two thousand three hundred" becomes 2300.
///
/// # Examples
/// ```
/// use number_search::numbers::{convert_words, NumberWordTable};
///
/// let table = NumberWordTable::global();
/// assert_eq!(convert_words(&["twenty", "one"], table).unwrap(), 21.0);
/// assert_eq!(
///     convert_words(&["one", "hundred", "and", "twenty", "one"], table).unwrap(),
///     121.0
/// );
/// assert!(convert_words(&["one", "score"], table).is_err());
/// ```
pub fn convert_words<S: AsRef<str>>(words: &[S], table: &NumberWordTable) -> Result<f64> {
    let mut current = 0.0_f64;
    let mut result = 0.0_f64;

    for word in words {
        let word = word.as_ref();
        let entry = table
            .lookup(word)
            .ok_or_else(|| SearchError::UnknownNumberWord {
                word: word.to_string(),
                sentence: None,
            })?;

        current = current * entry.scale as f64 + entry.increment as f64;
        if entry.scale > FLUSH_ABOVE_SCALE {
            result += current;
            current = 0.0;
        }
    }

    Ok(result + current)
}
