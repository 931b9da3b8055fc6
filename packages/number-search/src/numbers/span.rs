//! Detection of numeral spans in a token sequence.
//!
//! A single left-to-right pass finds digit-anchored spans (a digit literal
//! plus any scale words that follow it) and collects the remaining number
//! words. Those are grouped into maximal runs of adjacent tokens, and two
//! neighbouring runs are merged when exactly one "and" separates them.

use std::fmt;
use std::ops::Range;

use super::table::{NumberWordTable, JOINER};
use super::tokenizer::parse_digit_literal;

/// How a span was recognised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanOrigin {
    /// Starts with a digit literal; the value is already known.
    Digits { value: f64 },
    /// Made of number words only; needs conversion.
    Words,
}

/// A contiguous range of tokens that spells one quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSpan {
    /// First token index.
    pub start: usize,
    /// One past the last token index.
    pub end: usize,
    pub origin: SpanOrigin,
}

impl NumericSpan {
    /// Token index range covered by this span.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of tokens in the span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Spans always hold at least one token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Value for digit-anchored spans.
    #[must_use]
    pub fn known_value(&self) -> Option<f64> {
        match self.origin {
            SpanOrigin::Digits { value } => Some(value),
            SpanOrigin::Words => None,
        }
    }
}

/// Anomaly tolerated while extending a digit-anchored span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleWarning {
    /// A number word followed a digit literal but is not a scale word
    /// ("5 five"). The look-ahead stopped there and the word was left for
    /// word-run detection.
    MalformedScaleSuffix { index: usize, word: String },
}

impl fmt::Display for ScaleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedScaleSuffix { index, word } => write!(
                f,
                "'{word}' at token {index} follows a digit literal but is not a scale word"
            ),
        }
    }
}

/// Result of scanning one sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detection {
    /// Non-overlapping spans in left-to-right order.
    pub spans: Vec<NumericSpan>,
    pub warnings: Vec<ScaleWarning>,
}

/// Maximal run of adjacent number-word tokens, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordRun {
    start: usize,
    end: usize,
}

/// Whether a tokenized sentence is worth scanning at all.
///
/// True when any token contains a digit or is a number word.
pub fn has_numeric_content(tokens: &[String], table: &NumberWordTable) -> bool {
    tokens
        .iter()
        .any(|token| token.chars().any(|c| c.is_ascii_digit()) || table.is_number_word(token))
}

/// Find every numeral span in a token sequence.
///
/// # Examples
/// ```
/// use number_search::numbers::{detect_spans, NumberWordTable, SpanOrigin};
///
/// let tokens: Vec<String> = ["he", "has", "500", "thousand", "dollars"]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// let detection = detect_spans(&tokens, NumberWordTable::global());
///
/// assert_eq!(detection.spans.len(), 1);
/// assert_eq!(detection.spans[0].range(), 2..4);
/// assert_eq!(detection.spans[0].origin, SpanOrigin::Digits { value: 500_000.0 });
/// ```
pub fn detect_spans(tokens: &[String], table: &NumberWordTable) -> Detection {
    let mut consumed = vec![false; tokens.len()];
    let mut spans = Vec::new();
    let mut warnings = Vec::new();
    let mut word_indices = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        if consumed[index] {
            continue;
        }

        if let Some(mut value) = parse_digit_literal(token) {
            let mut end = index + 1;
            while let Some(next) = tokens.get(end) {
                if !table.is_number_word(next) {
                    break;
                }
                let Some(factor) = table.scale_factor(next) else {
                    tracing::warn!(
                        token = %next,
                        index = end,
                        "Number word after digit literal is not a scale word, stopping look-ahead"
                    );
                    warnings.push(ScaleWarning::MalformedScaleSuffix {
                        index: end,
                        word: next.clone(),
                    });
                    break;
                };
                value *= factor as f64;
                consumed[end] = true;
                end += 1;
            }
            spans.push(NumericSpan {
                start: index,
                end,
                origin: SpanOrigin::Digits { value },
            });
        } else if table.is_number_word(token) {
            word_indices.push(index);
        }
    }

    let runs = merge_joined_runs(collect_runs(&word_indices), tokens);
    spans.extend(runs.into_iter().map(|run| NumericSpan {
        start: run.start,
        end: run.end,
        origin: SpanOrigin::Words,
    }));
    spans.sort_by_key(|span| span.start);

    Detection { spans, warnings }
}

/// Group sorted token indices into maximal runs of consecutive indices.
fn collect_runs(indices: &[usize]) -> Vec<WordRun> {
    let mut runs: Vec<WordRun> = Vec::new();
    for &index in indices {
        match runs.last_mut() {
            Some(run) if run.end == index => run.end = index + 1,
            _ => runs.push(WordRun {
                start: index,
                end: index + 1,
            }),
        }
    }
    runs
}

/// Merge neighbouring runs separated by a single "and" token.
///
/// Merging is pairwise from the left: once a run has been absorbed into
/// its left neighbour, the merged group is not extended again.
fn merge_joined_runs(runs: Vec<WordRun>, tokens: &[String]) -> Vec<WordRun> {
    if runs.len() < 2 {
        return runs;
    }

    let mut merged = Vec::with_capacity(runs.len());
    let mut i = 0;
    while i < runs.len() {
        let current = runs[i];
        match runs.get(i + 1) {
            Some(next) if is_joined(current, *next, tokens) => {
                merged.push(WordRun {
                    start: current.start,
                    end: next.end,
                });
                i += 2;
            }
            _ => {
                merged.push(current);
                i += 1;
            }
        }
    }
    merged
}

fn is_joined(left: WordRun, right: WordRun, tokens: &[String]) -> bool {
    right.start == left.end + 1 && tokens.get(left.end).is_some_and(|gap| gap == JOINER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn detect(words: &[&str]) -> Detection {
        detect_spans(&tokens(words), NumberWordTable::global())
    }

    fn ranges(detection: &Detection) -> Vec<Range<usize>> {
        detection.spans.iter().map(NumericSpan::range).collect()
    }

    #[test]
    fn test_digit_with_scale_suffix() {
        let detection = detect(&["he", "has", "500", "thousand", "dollars"]);
        assert_eq!(ranges(&detection), vec![2..4]);
        assert_eq!(detection.spans[0].known_value(), Some(500_000.0));
        assert!(detection.warnings.is_empty());
    }

    #[test]
    fn test_digit_with_stacked_scales() {
        let detection = detect(&["2", "hundred", "thousand"]);
        assert_eq!(ranges(&detection), vec![0..3]);
        assert_eq!(detection.spans[0].known_value(), Some(200_000.0));
    }

    #[test]
    fn test_digit_without_suffix() {
        let detection = detect(&["costs", "12.5", "euro"]);
        assert_eq!(ranges(&detection), vec![1..2]);
        assert_eq!(detection.spans[0].known_value(), Some(12.5));
    }

    #[test]
    fn test_digit_at_end_of_sentence() {
        let detection = detect(&["total", "42"]);
        assert_eq!(ranges(&detection), vec![1..2]);
    }

    #[test]
    fn test_malformed_scale_suffix_is_tolerated() {
        let detection = detect(&["5", "five", "apples"]);
        assert_eq!(
            detection.warnings,
            vec![ScaleWarning::MalformedScaleSuffix {
                index: 1,
                word: "five".to_string()
            }]
        );
        // The digit span stops before "five", which becomes its own word span.
        assert_eq!(ranges(&detection), vec![0..1, 1..2]);
        assert_eq!(detection.spans[0].known_value(), Some(5.0));
        assert_eq!(detection.spans[1].origin, SpanOrigin::Words);
    }

    #[test]
    fn test_scale_then_malformed_suffix() {
        let detection = detect(&["3", "thousand", "two"]);
        assert_eq!(ranges(&detection), vec![0..2, 2..3]);
        assert_eq!(detection.spans[0].known_value(), Some(3000.0));
        assert_eq!(detection.warnings.len(), 1);
    }

    #[test]
    fn test_word_run() {
        let detection = detect(&["twenty", "one", "apples"]);
        assert_eq!(ranges(&detection), vec![0..2]);
        assert_eq!(detection.spans[0].origin, SpanOrigin::Words);
    }

    #[test]
    fn test_and_bridges_two_runs() {
        let detection = detect(&["one", "hundred", "and", "twenty", "one", "apples"]);
        assert_eq!(ranges(&detection), vec![0..5]);
    }

    #[test]
    fn test_and_between_unrelated_runs_does_not_merge() {
        let detection = detect(&[
            "twenty", "five", "apples", "and", "one", "hundred", "oranges",
        ]);
        assert_eq!(ranges(&detection), vec![0..2, 4..6]);
    }

    #[test]
    fn test_lone_and_is_not_a_span() {
        let detection = detect(&["cats", "and", "dogs"]);
        assert!(detection.spans.is_empty());
    }

    #[test]
    fn test_trailing_and_is_not_absorbed() {
        let detection = detect(&["two", "and", "dogs"]);
        assert_eq!(ranges(&detection), vec![0..1]);
    }

    #[test]
    fn test_merging_is_pairwise() {
        let detection = detect(&[
            "one", "million", "and", "two", "thousand", "and", "three",
        ]);
        assert_eq!(ranges(&detection), vec![0..5, 6..7]);
    }

    #[test]
    fn test_mixed_digit_and_word_spans_are_ordered() {
        let detection = detect(&["seven", "cats", "and", "3", "million", "mice"]);
        assert_eq!(ranges(&detection), vec![0..1, 3..5]);
        assert_eq!(detection.spans[0].origin, SpanOrigin::Words);
        assert_eq!(detection.spans[1].known_value(), Some(3_000_000.0));
    }

    #[test]
    fn test_scale_words_consumed_by_digits_are_not_word_spans() {
        let detection = detect(&["10", "million", "million"]);
        assert_eq!(ranges(&detection), vec![0..3]);
        assert_eq!(detection.spans[0].known_value(), Some(10e12));
    }

    #[test]
    fn test_no_numbers() {
        assert!(detect(&["nothing", "to", "see"]).spans.is_empty());
        assert!(detect(&[]).spans.is_empty());
    }

    #[test]
    fn test_has_numeric_content() {
        let table = NumberWordTable::global();
        assert!(has_numeric_content(&tokens(&["a", "7"]), table));
        assert!(has_numeric_content(&tokens(&["a", "dozen", "or", "two"]), table));
        assert!(has_numeric_content(&tokens(&["3rd"]), table));
        assert!(!has_numeric_content(&tokens(&["cats", "and", "dogs"]), table));
        assert!(!has_numeric_content(&[], table));
    }

    #[test]
    fn test_collect_runs() {
        assert_eq!(
            collect_runs(&[1, 2, 3, 5, 7, 8]),
            vec![
                WordRun { start: 1, end: 4 },
                WordRun { start: 5, end: 6 },
                WordRun { start: 7, end: 9 },
            ]
        );
        assert!(collect_runs(&[]).is_empty());
    }
}
