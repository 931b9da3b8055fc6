//! Sentence normalization and tokenization.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A thousands-grouping comma: digit, comma, exactly three digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GROUPING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d),(\d{3})\b").expect("valid regex"));

/// A digit literal with an optional fractional part.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DIGIT_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"));

/// Anchored form of [`DIGIT_LITERAL`] for whole tokens.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DIGIT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("valid regex"));

/// Remove thousands-grouping commas ("1,000,000" becomes "1000000").
///
/// Commas that do not separate a digit from exactly three more digits are
/// left alone, so "1,50" and "a,b" are unchanged.
pub fn strip_grouping_commas(text: &str) -> String {
    // Adjacent groups share a digit with the previous match, so repeat until stable.
    let mut result = text.to_string();
    loop {
        let replaced = GROUPING_COMMA.replace_all(&result, "$1$2");
        if let Cow::Borrowed(_) = replaced {
            break;
        }
        result = replaced.into_owned();
    }
    result
}

/// Put a space on both sides of every digit literal, then trim.
pub fn pad_digit_literals(text: &str) -> String {
    DIGIT_LITERAL
        .replace_all(text, " $0 ")
        .trim()
        .to_string()
}

/// Lowercase a sentence, normalize digit literals and split it into tokens.
///
/// # Examples
/// ```
/// use number_search::numbers::tokenize;
///
/// assert_eq!(
///     tokenize("He has 1,000 Dollars"),
///     vec!["he", "has", "1000", "dollars"]
/// );
/// assert_eq!(tokenize("costs 12.5k"), vec!["costs", "12.5", "k"]);
/// ```
pub fn tokenize(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    let without_commas = strip_grouping_commas(&lowered);
    let padded = pad_digit_literals(&without_commas);

    padded
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a token as a digit literal, ignoring any residual grouping commas.
///
/// Returns `None` for anything that is not purely digits with an optional
/// decimal part.
pub fn parse_digit_literal(token: &str) -> Option<f64> {
    let cleaned: Cow<'_, str> = if token.contains(',') {
        Cow::Owned(token.replace(',', ""))
    } else {
        Cow::Borrowed(token)
    };

    if !DIGIT_TOKEN.is_match(&cleaned) {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_grouping_commas() {
        assert_eq!(strip_grouping_commas("1,000"), "1000");
        assert_eq!(strip_grouping_commas("1,000,000"), "1000000");
        assert_eq!(strip_grouping_commas("12,345,678 and 9,876"), "12345678 and 9876");
    }

    #[test]
    fn test_strip_grouping_commas_leaves_other_commas() {
        assert_eq!(strip_grouping_commas("1,50"), "1,50");
        assert_eq!(strip_grouping_commas("1,0000"), "1,0000");
        assert_eq!(strip_grouping_commas("apples, pears"), "apples, pears");
        assert_eq!(strip_grouping_commas("a,123"), "a,123");
    }

    #[test]
    fn test_strip_grouping_commas_before_punctuation() {
        assert_eq!(strip_grouping_commas("1,000, then"), "1000, then");
        assert_eq!(strip_grouping_commas("(2,500)"), "(2500)");
    }

    #[test]
    fn test_pad_digit_literals() {
        assert_eq!(pad_digit_literals("abc123def"), "abc 123 def");
        assert_eq!(pad_digit_literals("12.5kg"), "12.5 kg");
        assert_eq!(pad_digit_literals("7"), "7");
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(
            tokenize("One hundred and twenty one Apples"),
            vec!["one", "hundred", "and", "twenty", "one", "apples"]
        );
    }

    #[test]
    fn test_tokenize_separates_glued_digits() {
        assert_eq!(tokenize("$500thousand"), vec!["$", "500", "thousand"]);
        assert_eq!(tokenize("3rd"), vec!["3", "rd"]);
    }

    #[test]
    fn test_tokenize_collapses_spaces() {
        assert_eq!(tokenize("  a   b  "), vec!["a", "b"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation_on_words() {
        assert_eq!(tokenize("apples, pears"), vec!["apples,", "pears"]);
    }

    #[test]
    fn test_parse_digit_literal() {
        assert_eq!(parse_digit_literal("500"), Some(500.0));
        assert_eq!(parse_digit_literal("12.5"), Some(12.5));
        assert_eq!(parse_digit_literal("1,000"), Some(1000.0));
        assert_eq!(parse_digit_literal("five"), None);
        assert_eq!(parse_digit_literal("12a"), None);
        assert_eq!(parse_digit_literal(""), None);
        assert_eq!(parse_digit_literal(","), None);
    }
}
