//! Sentence splitting.

/// Split text into sentences on the period character.
///
/// Empty pieces are dropped and line breaks inside a sentence become single
/// spaces. Nothing else is normalized: case, leading whitespace and other
/// punctuation are kept.
///
/// # Examples
/// ```
/// use number_search::numbers::split_sentences;
///
/// let sentences = split_sentences("One.\nTwo lines\nhere..");
/// assert_eq!(sentences, vec!["One", " Two lines here"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.replace("\r\n", " ").replace(['\n', '\r'], " "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_periods() {
        assert_eq!(
            split_sentences("He has 1,000 dollars. She has two"),
            vec!["He has 1,000 dollars", " She has two"]
        );
    }

    #[test]
    fn test_drops_empty_pieces() {
        assert_eq!(split_sentences("...a..b."), vec!["a", "b"]);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("....").is_empty());
    }

    #[test]
    fn test_keeps_whitespace_only_pieces() {
        // Only zero-length pieces are dropped here; blank sentences are
        // filtered later because they produce no tokens.
        assert_eq!(split_sentences("a. ."), vec!["a", " "]);
    }

    #[test]
    fn test_newlines_become_spaces() {
        assert_eq!(
            split_sentences("twenty\nfive apples\r\nand pears"),
            vec!["twenty five apples and pears"]
        );
    }

    #[test]
    fn test_decimal_points_split() {
        assert_eq!(split_sentences("pi is 3.14"), vec!["pi is 3", "14"]);
    }
}
