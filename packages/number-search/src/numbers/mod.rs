//! Detection and conversion of numbers written out in English words.
//!
//! Text is split into sentences, and each sentence flows one way through
//! the stages:
//!
//! ```text
//! tokenize -> detect_spans -> convert_words (word spans only) -> rewrite_sentence
//! ```
//!
//! Only the [`NumberWordTable`] outlives a single sentence.

mod convert;
mod pipeline;
mod rewrite;
mod sentence;
mod span;
mod table;
mod tokenizer;

pub use convert::convert_words;
pub use pipeline::{
    translate, TranslateOptions, Translation, Translator, UnknownWordPolicy,
    UnmatchedSentencePolicy,
};
pub use rewrite::{format_numeral, rewrite_sentence};
pub use sentence::split_sentences;
pub use span::{detect_spans, has_numeric_content, Detection, NumericSpan, ScaleWarning, SpanOrigin};
pub use table::{NumberWord, NumberWordTable, WordKind, JOINER};
pub use tokenizer::{pad_digit_literals, parse_digit_literal, strip_grouping_commas, tokenize};
